//! Calendar component: event model, store, date bucketing, time slots and
//! read-only projections.

mod actor;
pub mod bucketing;
mod handle;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;
pub mod time;

pub use bucketing::{cells_for, panels_for, CalendarCell, MonthPanel, ViewMode};
pub use handle::CalendarHandle;
pub use models::{CalendarEvent, Category, EventId, EventPatch, NewEventInput};
pub use query::{category_counts, HourRow, Projection};
pub use store::EventStore;
pub use time::{resolve_hour, HourWindow, TimeOfDay};
