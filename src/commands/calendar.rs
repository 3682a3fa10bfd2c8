use crate::components::calendar::bucketing::{
    panels_for, visible_range, CalendarCell, MonthPanel, ViewMode,
};
use crate::components::calendar::{
    category_counts, CalendarEvent, Category, HourWindow, Projection, TimeOfDay,
};
use crate::components::calendar::models::CategoryStyle;
use crate::error::CalendarResult;
use crate::utils::time::week_dates;
use chrono::{Datelike, NaiveDate};
use rust_i18n::t;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Width of one day column in the hourly grid
const COLUMN_WIDTH: usize = 16;

/// Events listed under "Upcoming" in the day view
const UPCOMING_LIMIT: usize = 5;

/// Localised label for a category
pub fn category_label(category: Category) -> String {
    match category {
        Category::Hearing => t!("category_hearing"),
        Category::Meeting => t!("category_meeting"),
        Category::Consultation => t!("category_consultation"),
        Category::Deadline => t!("category_deadline"),
    }
    .to_string()
}

/// Render a view as text: the grid first, then the agenda
pub fn render_view(projection: &Projection<'_>, mode: ViewMode, window: HourWindow) -> String {
    let reference = projection.reference();
    match mode {
        ViewMode::Day => {
            let mut message = t!("calendar_day_title", date = reference.format("%A, %B %d")).to_string();
            message.push_str("\n\n");
            let events = projection.events_on(reference);
            message.push_str(&render_hour_grid(projection, &[reference], window));
            push_outside_window_note(&mut message, &events, window);
            message.push('\n');
            message.push_str(&render_agenda(&events));
            message.push('\n');
            message.push_str(&render_upcoming(projection, reference));
            message
        }
        ViewMode::Week => {
            let week = week_dates(reference);
            let mut message = t!(
                "calendar_week_title",
                start = week[0].format("%b %d"),
                end = week[6].format("%b %d")
            )
            .to_string();
            message.push_str("\n\n");
            let events = projection.events_in_week(&week);
            message.push_str(&render_hour_grid(projection, &week, window));
            push_outside_window_note(&mut message, &events, window);
            message.push('\n');
            message.push_str(&render_agenda(&events));
            message
        }
        ViewMode::Month | ViewMode::Quarter => panels_for(reference, mode)
            .iter()
            .enumerate()
            .map(|(offset, panel)| render_month(projection, panel, offset as i32))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Hour rows for the given dates. Each cell holds at most one event.
pub fn render_hour_grid(projection: &Projection<'_>, dates: &[NaiveDate], window: HourWindow) -> String {
    let mut message = format!("{}\n", t!("calendar_grid_title"));

    message.push_str(&" ".repeat(9));
    for date in dates {
        message.push_str(&pad(&date.format("%a %d").to_string(), COLUMN_WIDTH));
    }
    message.push('\n');

    for row in projection.hour_grid(dates, window) {
        let label = TimeOfDay { hour: row.hour, minute: 0 };
        message.push_str(&pad(&label.to_string(), 9));
        for slot in &row.slots {
            let cell = match slot {
                Some(event) => truncate(&event.title, COLUMN_WIDTH - 1),
                None => "·".to_string(),
            };
            message.push_str(&pad(&cell, COLUMN_WIDTH));
        }
        message.truncate(message.trim_end().len());
        message.push('\n');
    }

    message
}

/// Flat list of events grouped under date headings, in the given order
pub fn render_agenda(events: &[&CalendarEvent]) -> String {
    let mut message = format!("{}\n", t!("calendar_agenda_title"));

    if events.is_empty() {
        message.push_str(&t!("calendar_no_events"));
        message.push('\n');
        return message;
    }

    let mut current_date = None;
    for event in events {
        if current_date != Some(event.date) {
            current_date = Some(event.date);
            message.push_str(&format!("\n{}\n", event.date.format("%A, %B %d")));
        }

        message.push_str(&format!(
            "  {:>8}  {} [{}]",
            event.time,
            event.title,
            category_label(event.category)
        ));
        if let Some(location) = &event.location {
            message.push_str(&format!(" @ {}", location));
        }
        message.push('\n');
    }

    message
}

/// Note under the grid for events whose hour falls outside the window
fn push_outside_window_note(message: &mut String, events: &[&CalendarEvent], window: HourWindow) {
    let hidden = events.iter().filter(|e| !window.contains(e.hour())).count();
    if hidden > 0 {
        message.push_str(&t!("calendar_outside_window", count = hidden));
        message.push('\n');
    }
}

/// The next few events after `reference`, by date and time
fn render_upcoming(projection: &Projection<'_>, reference: NaiveDate) -> String {
    let mut message = format!("{}\n", t!("calendar_upcoming_title"));
    let Some(from) = reference.succ_opt() else {
        return message;
    };

    let events = projection.upcoming(from, UPCOMING_LIMIT);
    if events.is_empty() {
        message.push_str(&t!("calendar_no_events"));
        message.push('\n');
    }
    for event in events {
        message.push_str(&format!(
            "  {} {:>8}  {} [{}]\n",
            event.date.format("%a %b %d"),
            event.time,
            event.title,
            category_label(event.category)
        ));
    }
    message
}

/// Month grid with a marker on days that have events, followed by the
/// per-category counts for the month
fn render_month(projection: &Projection<'_>, panel: &MonthPanel, month_offset: i32) -> String {
    let month_events = projection.events_in_month(month_offset);
    let title = NaiveDate::from_ymd_opt(panel.year, panel.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();

    let mut message = t!("calendar_month_title", month = title, count = month_events.len()).to_string();
    message.push_str("\n Sun  Mon  Tue  Wed  Thu  Fri  Sat\n");

    for week in panel.cells.chunks(7) {
        for cell in week {
            let text = match cell {
                CalendarCell::Empty => String::new(),
                CalendarCell::Date(date) => {
                    let marker = if month_events.iter().any(|e| e.date == *date) { "*" } else { " " };
                    format!("{:>3}{}", date.day(), marker)
                }
            };
            message.push_str(&format!("{:<5}", text));
        }
        message.truncate(message.trim_end().len());
        message.push('\n');
    }

    let counts = category_counts(month_events.iter().copied());
    if !counts.is_empty() {
        message.push_str(&format!("{}: ", t!("calendar_counts_title")));
        let parts: Vec<String> = counts
            .iter()
            .map(|(category, count)| format!("{} {}", category_label(*category), count))
            .collect();
        message.push_str(&parts.join(", "));
        message.push('\n');
    }

    message
}

/// JSON projection of a view for other front ends
pub fn view_json(projection: &Projection<'_>, mode: ViewMode, window: HourWindow) -> CalendarResult<Value> {
    let reference = projection.reference();
    let panels = panels_for(reference, mode);

    let (agenda, grid) = match mode {
        ViewMode::Day => (
            projection.events_on(reference),
            Some(projection.hour_grid(&[reference], window)),
        ),
        ViewMode::Week => {
            let week = week_dates(reference);
            (projection.events_in_week(&week), Some(projection.hour_grid(&week, window)))
        }
        ViewMode::Month | ViewMode::Quarter => (
            (0..panels.len() as i32)
                .flat_map(|offset| projection.events_in_month(offset))
                .collect(),
            None,
        ),
    };

    let counts = category_counts(agenda.iter().copied());
    let styles: BTreeMap<Category, CategoryStyle> =
        counts.keys().map(|category| (*category, category.style())).collect();
    let (start, end) = visible_range(reference, mode);

    Ok(json!({
        "reference": reference,
        "view": mode,
        "range": { "start": start, "end": end },
        "panels": serde_json::to_value(&panels)?,
        "hour_grid": serde_json::to_value(&grid)?,
        "agenda": serde_json::to_value(&agenda)?,
        "counts": serde_json::to_value(&counts)?,
        "styles": serde_json::to_value(&styles)?,
    }))
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
