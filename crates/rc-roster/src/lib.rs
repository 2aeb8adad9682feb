//! Directory repositories for RollCall.
//!
//! Faculty, subject, and student rosters behind async repository traits,
//! with an in-memory store for development and tests. The assistant crate
//! reads these; the portal management screens write them.

pub mod error;
pub mod memory;
pub mod store;

// Re-export key types for convenience
pub use error::{RosterError, RosterResult};
pub use memory::InMemoryRoster;
pub use store::{
    FacultyRepository, NewFaculty, NewStudent, NewSubject, StudentRepository, SubjectRepository,
};
