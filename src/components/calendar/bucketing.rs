//! Maps a reference date and view mode onto the cells a calendar renders.
//!
//! Everything here is independent of which events exist; pair the cells
//! with [`super::query::Projection`] to find what goes in them.

use crate::error::Error;
use crate::utils::time::{days_in_month, first_of_month, shift_days, shift_months, shift_year_month, week_dates};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the calendar groups dates for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [ViewMode::Day, ViewMode::Week, ViewMode::Month, ViewMode::Quarter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Quarter => "quarter",
        }
    }

    /// Move the reference date by `steps` units of this view: one day, seven
    /// days, one month or three months. Negative steps move backwards.
    pub fn step(&self, reference: NaiveDate, steps: i32) -> NaiveDate {
        match self {
            ViewMode::Day => shift_days(reference, steps as i64),
            ViewMode::Week => shift_days(reference, 7 * steps as i64),
            ViewMode::Month => shift_months(reference, steps),
            ViewMode::Quarter => shift_months(reference, steps.saturating_mul(3)),
        }
    }

    /// Number of month panels this view renders
    fn month_span(&self) -> i32 {
        match self {
            ViewMode::Quarter => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::InvalidViewMode(s.to_string()))
    }
}

/// One slot of a rendered calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "lowercase")]
pub enum CalendarCell {
    /// Leading padding before the first of a month
    Empty,
    Date(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Date(date) => Some(*date),
        }
    }
}

/// Cells of a single month, or of the day/week strip inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPanel {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

/// Sunday-start month grid: one empty cell per weekday before the first,
/// then every day of the month. No trailing padding.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let Some(first) = first_of_month(year, month) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![CalendarCell::Empty; leading];
    cells.extend(
        (1..=days_in_month(year, month))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .map(CalendarCell::Date),
    );
    cells
}

/// Cells to render for a view, grouped per month
pub fn panels_for(reference: NaiveDate, mode: ViewMode) -> Vec<MonthPanel> {
    let panel = |year, month, cells| MonthPanel { year, month, cells };

    match mode {
        ViewMode::Day => vec![panel(
            reference.year(),
            reference.month(),
            vec![CalendarCell::Date(reference)],
        )],
        ViewMode::Week => vec![panel(
            reference.year(),
            reference.month(),
            week_dates(reference).into_iter().map(CalendarCell::Date).collect(),
        )],
        ViewMode::Month | ViewMode::Quarter => (0..mode.month_span())
            .map(|offset| {
                let (year, month) = shift_year_month(reference.year(), reference.month(), offset);
                panel(year, month, month_grid(year, month))
            })
            .collect(),
    }
}

/// Cells to render for a view. Quarter views return the three month grids
/// back to back, each with its own leading blanks.
pub fn cells_for(reference: NaiveDate, mode: ViewMode) -> Vec<CalendarCell> {
    panels_for(reference, mode)
        .into_iter()
        .flat_map(|panel| panel.cells)
        .collect()
}

/// First and last date visible in a view
pub fn visible_range(reference: NaiveDate, mode: ViewMode) -> (NaiveDate, NaiveDate) {
    let dates: Vec<NaiveDate> = cells_for(reference, mode)
        .iter()
        .filter_map(CalendarCell::date)
        .collect();
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => (reference, reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leading_blanks(cells: &[CalendarCell]) -> usize {
        cells.iter().take_while(|c| **c == CalendarCell::Empty).count()
    }

    #[test]
    fn test_day_view() {
        let reference = date(2026, 1, 6);
        assert_eq!(cells_for(reference, ViewMode::Day), vec![CalendarCell::Date(reference)]);
    }

    #[test]
    fn test_week_view_starts_on_sunday() {
        let cells = cells_for(date(2026, 1, 6), ViewMode::Week);
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], CalendarCell::Date(date(2026, 1, 4)));
        assert_eq!(cells[0].date().unwrap().weekday(), Weekday::Sun);
        assert_eq!(cells[6], CalendarCell::Date(date(2026, 1, 10)));
    }

    #[test]
    fn test_month_grid_layout() {
        // January 2026 starts on a Thursday
        let cells = month_grid(2026, 1);
        assert_eq!(leading_blanks(&cells), 4);
        assert_eq!(cells.len(), 4 + 31);
        assert_eq!(cells[4], CalendarCell::Date(date(2026, 1, 1)));
        assert_eq!(cells.last(), Some(&CalendarCell::Date(date(2026, 1, 31))));

        // February 2026 starts on a Sunday and has no padding
        let cells = month_grid(2026, 2);
        assert_eq!(leading_blanks(&cells), 0);
        assert_eq!(cells.len(), 28);

        // Leap year February
        assert_eq!(month_grid(2024, 2).iter().filter(|c| c.date().is_some()).count(), 29);

        assert!(month_grid(2026, 13).is_empty());
    }

    #[test]
    fn test_quarter_view_rolls_over_year() {
        let panels = panels_for(date(2026, 11, 20), ViewMode::Quarter);
        let months: Vec<_> = panels.iter().map(|p| (p.year, p.month)).collect();
        assert_eq!(months, vec![(2026, 11), (2026, 12), (2027, 1)]);

        let flat = cells_for(date(2026, 11, 20), ViewMode::Quarter);
        let total: usize = panels.iter().map(|p| p.cells.len()).sum();
        assert_eq!(flat.len(), total);
        assert_eq!(panels[2].cells, month_grid(2027, 1));
    }

    #[test]
    fn test_navigation_steps_by_natural_unit() {
        let reference = date(2026, 1, 31);
        assert_eq!(ViewMode::Day.step(reference, 1), date(2026, 2, 1));
        assert_eq!(ViewMode::Day.step(reference, -1), date(2026, 1, 30));
        assert_eq!(ViewMode::Week.step(reference, 1), date(2026, 2, 7));
        assert_eq!(ViewMode::Week.step(reference, -2), date(2026, 1, 17));
        assert_eq!(ViewMode::Month.step(reference, 1), date(2026, 2, 28));
        assert_eq!(ViewMode::Month.step(reference, -1), date(2025, 12, 31));
        assert_eq!(ViewMode::Quarter.step(reference, 1), date(2026, 4, 30));
        assert_eq!(ViewMode::Quarter.step(date(2026, 11, 15), 1), date(2027, 2, 15));
    }

    #[test]
    fn test_navigation_out_of_range_keeps_reference() {
        let reference = date(2026, 1, 6);
        for mode in ViewMode::ALL {
            assert_eq!(mode.step(reference, 1_000_000_000), reference);
            assert_eq!(mode.step(reference, i32::MIN), reference);
        }
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(
            visible_range(date(2026, 1, 6), ViewMode::Week),
            (date(2026, 1, 4), date(2026, 1, 10))
        );
        assert_eq!(
            visible_range(date(2026, 11, 20), ViewMode::Quarter),
            (date(2026, 11, 1), date(2027, 1, 31))
        );
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("quarter".parse::<ViewMode>().unwrap(), ViewMode::Quarter);
        assert!(matches!("year".parse::<ViewMode>(), Err(Error::InvalidViewMode(_))));
    }
}
