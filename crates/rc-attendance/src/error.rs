//! Attendance error types.

use thiserror::Error;

/// Errors that can occur during ledger and stats operations.
#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("invalid session {field}: {reason}")]
    InvalidSession { field: &'static str, reason: String },

    #[error("directory lookup failed: {0}")]
    Directory(String),

    #[error("stats provider failed: {0}")]
    Provider(String),
}

/// Convenience alias for attendance results.
pub type AttendanceResult<T> = Result<T, AttendanceError>;

impl From<rc_roster::RosterError> for AttendanceError {
    fn from(err: rc_roster::RosterError) -> Self {
        AttendanceError::Directory(err.to_string())
    }
}
