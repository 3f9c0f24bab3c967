//! Error types for event filtering.
//!
//! Evaluation itself never fails. These errors only come from building the
//! inputs: parsing constraint documents and defining calendar dates.

use thiserror::Error;

/// Result type for event filtering setup.
pub type EventResult<T> = Result<T, EventError>;

/// Errors raised while loading constraints or building a calendar.
#[derive(Debug, Error)]
pub enum EventError {
    /// A constraint document could not be parsed.
    #[error("invalid constraint specification: {0}")]
    InvalidConstraints(#[from] serde_json::Error),

    /// A special date names a day that does not exist.
    #[error("invalid special date {name}: month {month}, day {day}")]
    InvalidDate {
        /// Special date name.
        name: String,
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },
}
