//! Directory error types.

use thiserror::Error;

/// Errors that can occur during directory repository operations.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("storage error: {0}")]
    Storage(String),
}

/// Convenience alias for directory results.
pub type RosterResult<T> = Result<T, RosterError>;
