// Export components
pub mod calendar;

// Re-export the calendar handle
pub use calendar::CalendarHandle;
