//! Repository abstractions for the directory — faculty, subjects, students.
//!
//! The assistant consumes read-only snapshots; writes come from the portal
//! management screens. In-memory and database-backed stores implement the
//! same traits, so the assistant never cares which one it is talking to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rc_protocol::{FacultyRecord, StudentRecord, SubjectRecord};

use crate::error::RosterResult;

/// Input for registering a new faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaculty {
    pub name: String,
    pub email: String,
    pub password: String,
    pub faculty_id: String,
}

/// Input for adding a new subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub credits: u32,
}

/// Input for enrolling a new student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub usn: String,
    pub name: String,
    pub email: String,
    pub semester: u8,
    pub section: String,
}

/// Read/write access to the faculty directory.
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// All faculty, in insertion order.
    async fn list(&self) -> RosterResult<Vec<FacultyRecord>>;

    /// Find by the human-facing faculty ID (case-insensitive).
    async fn find_by_faculty_id(&self, faculty_id: &str) -> RosterResult<Option<FacultyRecord>>;

    /// Find by login email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> RosterResult<Option<FacultyRecord>>;

    /// Register a new faculty member, enforcing email and faculty-ID
    /// uniqueness.
    async fn add(&self, new: NewFaculty) -> RosterResult<FacultyRecord>;

    /// Remove a faculty member by faculty ID.
    async fn remove(&self, faculty_id: &str) -> RosterResult<()>;

    /// Append a subject code to a faculty's assignment list. Adding a code
    /// that is already assigned is a no-op.
    async fn assign_subject(&self, faculty_id: &str, code: &str) -> RosterResult<FacultyRecord>;
}

/// Read/write access to the subject catalog.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// All subjects, in insertion order.
    async fn list(&self) -> RosterResult<Vec<SubjectRecord>>;

    /// Find by subject code (case-insensitive).
    async fn find_by_code(&self, code: &str) -> RosterResult<Option<SubjectRecord>>;

    /// Add a subject, enforcing code uniqueness and semester/credit bounds.
    async fn add(&self, new: NewSubject) -> RosterResult<SubjectRecord>;

    /// Remove a subject by code.
    async fn remove(&self, code: &str) -> RosterResult<()>;

    /// Record which faculty teaches a subject.
    async fn set_faculty(
        &self,
        code: &str,
        faculty_id: &str,
        faculty_name: &str,
    ) -> RosterResult<SubjectRecord>;
}

/// Read/write access to the student roster.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students, in insertion order.
    async fn list(&self) -> RosterResult<Vec<StudentRecord>>;

    /// Find by USN (case-insensitive).
    async fn find_by_usn(&self, usn: &str) -> RosterResult<Option<StudentRecord>>;

    /// Enroll a student, enforcing USN uniqueness.
    async fn add(&self, new: NewStudent) -> RosterResult<StudentRecord>;
}
