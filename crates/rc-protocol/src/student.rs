use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether `token` has the University Seat Number shape: exactly 10 ASCII
/// alphanumerics with at least one digit and at least one letter.
///
/// The mixed-content requirement keeps plain words ("attendance" is ten
/// letters) from being mistaken for seat numbers.
pub fn is_usn_shaped(token: &str) -> bool {
    token.len() == 10
        && token.chars().all(|c| c.is_ascii_alphanumeric())
        && token.chars().any(|c| c.is_ascii_digit())
        && token.chars().any(|c| c.is_ascii_alphabetic())
}

/// A student as stored in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: Uuid,
    /// University Seat Number: 10 alphanumerics (e.g., "1MS21CS001").
    pub usn: String,
    pub name: String,
    pub email: String,
    pub semester: u8,
    pub section: String,
    pub created_at: DateTime<Utc>,
}

impl StudentRecord {
    pub fn new(
        usn: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        semester: u8,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            usn: usn.into(),
            name: name.into(),
            email: email.into(),
            semester,
            section: section.into(),
            created_at: Utc::now(),
        }
    }
}
