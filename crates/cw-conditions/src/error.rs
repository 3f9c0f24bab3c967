//! Error types for the condition model.

use thiserror::Error;

/// Result type for condition operations.
pub type ConditionResult<T> = Result<T, ConditionError>;

/// Errors that can occur while loading or instantiating conditions.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// The catalog has no condition of that kind with that name.
    #[error("unknown {kind}: {name}")]
    UnknownCondition {
        /// Condition kind ("illness", "injury", "permanent condition").
        kind: &'static str,
        /// Requested name.
        name: String,
    },

    /// The catalog document could not be parsed.
    #[error("invalid condition catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}
