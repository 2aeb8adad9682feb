use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder shown in place of a password when credential access is
/// restricted.
pub const MASKED_PASSWORD: &str = "••••••••";

/// A faculty member as stored in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyRecord {
    /// Internal database ID.
    pub id: Uuid,
    /// Display name, including honorific (e.g., "Dr. Priya Sharma").
    pub name: String,
    /// Portal login email (unique within the directory).
    pub email: String,
    /// Portal login password. The upstream data model stores these in
    /// plaintext; the assistant gates exposure via its credential policy.
    pub password: String,
    /// Human-facing faculty ID (unique, e.g., "FAC-101").
    pub faculty_id: String,
    /// Codes of the subjects this faculty teaches, in assignment order.
    #[serde(default)]
    pub assigned_subjects: Vec<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl FacultyRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        faculty_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            faculty_id: faculty_id.into(),
            assigned_subjects: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Copy of this record with the password masked.
    pub fn redacted(&self) -> Self {
        Self {
            password: MASKED_PASSWORD.into(),
            ..self.clone()
        }
    }
}
