use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subject (course offering) in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Internal database ID.
    pub id: Uuid,
    /// Full subject name (e.g., "Data Structures").
    pub name: String,
    /// Short code used on timetables (unique, e.g., "CS301").
    pub code: String,
    /// Faculty ID of the assigned teacher, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    /// Denormalized teacher name, kept in sync with `faculty_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
    /// Semester the subject is taught in (1-8).
    pub semester: u8,
    /// Credit weight.
    pub credits: u32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SubjectRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>, semester: u8, credits: u32) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            code: code.into(),
            faculty_id: None,
            faculty_name: None,
            semester,
            credits,
            created_at: Utc::now(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.faculty_id.is_some()
    }
}
