use super::models::{CalendarEvent, Category};
use super::time::HourWindow;
use crate::utils::time::shift_year_month;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Read-only queries over a snapshot of the event store.
///
/// Nothing here mutates or caches; it is safe to build a projection on
/// every render.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    events: &'a [CalendarEvent],
    reference: NaiveDate,
}

/// One hour row of the day/week grid, with a slot per rendered date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRow<'a> {
    pub hour: u32,
    pub slots: Vec<Option<&'a CalendarEvent>>,
}

impl<'a> Projection<'a> {
    pub fn new(events: &'a [CalendarEvent], reference: NaiveDate) -> Self {
        Self { events, reference }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Events on a date, in store order
    pub fn events_on(&self, date: NaiveDate) -> Vec<&'a CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Events on a date, ordered by time of day
    pub fn events_on_sorted(&self, date: NaiveDate) -> Vec<&'a CalendarEvent> {
        let mut events = self.events_on(date);
        events.sort_by_key(|e| e.time);
        events
    }

    /// The event shown in a single hour cell.
    ///
    /// Only the first event in store order whose hour matches is returned;
    /// later events in the same hour appear in the agenda but not the grid.
    pub fn events_on_at_hour(&self, date: NaiveDate, hour: u32) -> Option<&'a CalendarEvent> {
        self.events
            .iter()
            .find(|e| e.date == date && e.hour() == hour)
    }

    /// Every event in an hour cell, in store order
    pub fn events_in_hour_slot(&self, date: NaiveDate, hour: u32) -> Vec<&'a CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.date == date && e.hour() == hour)
            .collect()
    }

    /// Agenda for a week: the union of each day's events, sorted by date.
    /// Events sharing a date keep their store order.
    pub fn events_in_week(&self, week: &[NaiveDate]) -> Vec<&'a CalendarEvent> {
        let mut events: Vec<&CalendarEvent> = self
            .events
            .iter()
            .filter(|e| week.contains(&e.date))
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Events in the month `month_offset` months after the reference month
    pub fn events_in_month(&self, month_offset: i32) -> Vec<&'a CalendarEvent> {
        let (year, month) =
            shift_year_month(self.reference.year(), self.reference.month(), month_offset);
        self.events
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    /// Hour rows for the given dates, each slot filled with the event that
    /// wins the hour under [`Projection::events_on_at_hour`]
    pub fn hour_grid(&self, dates: &[NaiveDate], window: HourWindow) -> Vec<HourRow<'a>> {
        window
            .hours()
            .map(|hour| HourRow {
                hour,
                slots: dates
                    .iter()
                    .map(|date| self.events_on_at_hour(*date, hour))
                    .collect(),
            })
            .collect()
    }

    /// Events on or after `from`, ordered by date then time
    pub fn upcoming(&self, from: NaiveDate, limit: usize) -> Vec<&'a CalendarEvent> {
        let mut events: Vec<&CalendarEvent> =
            self.events.iter().filter(|e| e.date >= from).collect();
        events.sort_by_key(|e| (e.date, e.time));
        events.truncate(limit);
        events
    }
}

/// Number of events per category, for dashboard badges
pub fn category_counts<'a, I>(events: I) -> BTreeMap<Category, usize>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.category).or_insert(0) += 1;
    }
    counts
}
