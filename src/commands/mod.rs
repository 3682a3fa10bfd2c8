use crate::components::calendar::{Projection, ViewMode};
use crate::components::CalendarHandle;
use crate::config::Config;
use crate::error::CalendarResult;
use chrono::NaiveDate;
use tracing::debug;

// Export submodules
pub mod calendar;

/// Shared context for rendering commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    /// Date the view is centred on, after navigation
    pub reference: NaiveDate,
    pub view: ViewMode,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: Config, reference: NaiveDate) -> Self {
        let view = config.default_view;
        Self {
            config,
            reference,
            view,
        }
    }

    /// Set the view mode
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Move the reference date by whole units of the current view
    pub fn navigate(mut self, steps: i32) -> Self {
        self.reference = self.view.step(self.reference, steps);
        self
    }
}

/// Output format of a rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render the context's view from a fresh snapshot of the calendar
pub async fn show_view(
    ctx: &CommandContext,
    handle: &CalendarHandle,
    format: OutputFormat,
) -> CalendarResult<String> {
    let events = handle.snapshot().await?;
    debug!(
        "Rendering {} view around {} from {} events",
        ctx.view,
        ctx.reference,
        events.len()
    );

    let projection = Projection::new(&events, ctx.reference);
    let window = ctx.config.hour_window;

    match format {
        OutputFormat::Text => Ok(calendar::render_view(&projection, ctx.view, window)),
        OutputFormat::Json => {
            let value = calendar::view_json(&projection, ctx.view, window)?;
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
