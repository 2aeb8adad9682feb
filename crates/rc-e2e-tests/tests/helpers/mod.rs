//! Shared test harness for E2E integration tests.
//!
//! Wires a `ChatSession` to an in-memory roster and a ledger-backed
//! stats provider, exercising real code paths across all crate
//! boundaries.

use std::sync::Arc;

use chrono::NaiveDate;

use rc_assistant::{AssistantConfig, ChatSession};
use rc_attendance::{AttendanceLedger, InMemoryLedger, LedgerStatsProvider, NewSession};
use rc_protocol::ClassSession;
use rc_roster::InMemoryRoster;

/// End-to-end test harness wiring the assistant to live stores.
pub struct TestHarness {
    /// Concrete roster handle for direct mutation from tests. The session
    /// holds trait-object clones of the same store.
    pub roster: Arc<InMemoryRoster>,
    /// Class-session ledger backing the stats provider.
    pub ledger: Arc<InMemoryLedger>,
    /// Chat session under test.
    pub session: ChatSession,
}

impl TestHarness {
    /// Harness over the seeded sample department, stats wired through the
    /// ledger.
    pub fn with_sample_data() -> Self {
        Self::build(InMemoryRoster::with_sample_data(), AssistantConfig::default())
    }

    /// Harness over an empty directory.
    pub fn empty() -> Self {
        Self::build(InMemoryRoster::new(), AssistantConfig::default())
    }

    /// Harness over the sample department with a custom assistant config.
    pub fn with_config(config: AssistantConfig) -> Self {
        Self::build(InMemoryRoster::with_sample_data(), config)
    }

    fn build(roster: InMemoryRoster, config: AssistantConfig) -> Self {
        let roster = Arc::new(roster);
        let ledger = Arc::new(InMemoryLedger::new());
        let provider =
            LedgerStatsProvider::new(ledger.clone(), roster.clone(), roster.clone());

        let session = ChatSession::new(config, roster.clone(), roster.clone(), roster.clone())
            .with_stats(Arc::new(provider));

        Self {
            roster,
            ledger,
            session,
        }
    }

    /// Record one held class on the ledger.
    pub async fn record_class(
        &self,
        subject_code: &str,
        faculty_id: &str,
        held_on: NaiveDate,
        duration_hours: u32,
        present: &[&str],
        strength: u32,
    ) -> ClassSession {
        self.ledger
            .record(NewSession {
                subject_code: subject_code.into(),
                faculty_id: faculty_id.into(),
                held_on,
                duration_hours,
                present: present.iter().map(|usn| usn.to_string()).collect(),
                strength,
            })
            .await
            .unwrap()
    }

    /// Submit one message and return the reply.
    pub async fn ask(&mut self, text: &str) -> rc_protocol::ChatReply {
        self.session.submit(text).await
    }
}
