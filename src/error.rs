use crate::components::calendar::models::EventId;
use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the calendar
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Missing required field: {field}")]
    #[diagnostic(
        code(yugality::missing_required_field),
        help("Fill in the field before submitting the event")
    )]
    MissingRequiredField { field: &'static str },

    #[error("No event with id {0}")]
    #[diagnostic(code(yugality::not_found))]
    NotFound(EventId),

    #[error("Invalid time of day: {0}")]
    #[diagnostic(
        code(yugality::invalid_time),
        help("Use a clock string such as \"10:30 AM\" or \"14:00\"")
    )]
    InvalidTime(String),

    #[error("Invalid category: {0}")]
    #[diagnostic(
        code(yugality::invalid_category),
        help("Expected one of: hearing, meeting, consultation, deadline")
    )]
    InvalidCategory(String),

    #[error("Invalid view mode: {0}")]
    #[diagnostic(
        code(yugality::invalid_view_mode),
        help("Expected one of: day, week, month, quarter")
    )]
    InvalidViewMode(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(yugality::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(yugality::config))]
    Config(String),

    #[error("Calendar actor error: {0}")]
    #[diagnostic(code(yugality::actor))]
    Actor(String),

    #[error(transparent)]
    #[diagnostic(code(yugality::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(yugality::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(yugality::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CalendarResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, reason: &str) -> Error {
    Error::Environment(format!("Invalid environment variable {}: {}", var, reason))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create actor errors
pub fn actor_error(message: &str) -> Error {
    Error::Actor(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
