//! Attendance tracking for RollCall.
//!
//! An append-only class-session ledger, pure aggregation functions, and a
//! `StatsProvider` abstraction so the assistant can be tested against
//! fixed or failing backends.

pub mod error;
pub mod ledger;
pub mod mock;
pub mod provider;
pub mod stats;

// Re-export key types for convenience
pub use error::{AttendanceError, AttendanceResult};
pub use ledger::{AttendanceLedger, InMemoryLedger, NewSession};
pub use mock::{FailingStatsProvider, FixedStatsProvider};
pub use provider::{LedgerStatsProvider, StatsProvider};
