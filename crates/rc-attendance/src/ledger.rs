//! Class-session ledger — records held classes and serves session views.

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use rc_protocol::ClassSession;

use crate::error::{AttendanceError, AttendanceResult};

/// Input for recording one held class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSession {
    pub subject_code: String,
    pub faculty_id: String,
    pub held_on: NaiveDate,
    pub duration_hours: u32,
    /// USNs marked present.
    pub present: Vec<String>,
    /// Enrolled strength the roll was taken against.
    pub strength: u32,
}

/// Append-only store of held class sessions.
#[async_trait]
pub trait AttendanceLedger: Send + Sync {
    /// Record one held class.
    async fn record(&self, new: NewSession) -> AttendanceResult<ClassSession>;

    /// Sessions taken by the given faculty, in recording order.
    async fn sessions_for_faculty(&self, faculty_id: &str) -> AttendanceResult<Vec<ClassSession>>;

    /// Sessions held for the given subject, in recording order.
    async fn sessions_for_subject(&self, code: &str) -> AttendanceResult<Vec<ClassSession>>;

    /// Every recorded session.
    async fn all_sessions(&self) -> AttendanceResult<Vec<ClassSession>>;
}

/// In-memory ledger backed by `RwLock<Vec<_>>`.
pub struct InMemoryLedger {
    sessions: RwLock<Vec<ClassSession>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(Vec::new()),
        }
    }

    /// Ledger pre-seeded with recent classes for the sample department,
    /// for development and demos.
    pub fn with_sample_sessions() -> Self {
        let today = Utc::now().date_naive();
        let roll = ["1MS21CS001", "1MS21CS002", "1MS21CS003"];
        let mut sessions = Vec::new();
        for (subject_code, faculty_id, days_ago, duration_hours, present) in [
            ("CS301", "FAC-101", 7, 1, &roll[..2]),
            ("CS301", "FAC-101", 4, 1, &roll[..3]),
            ("CS302", "FAC-101", 2, 2, &roll[..1]),
            ("CS303", "FAC-102", 1, 1, &roll[..3]),
        ] {
            sessions.push(ClassSession {
                id: Uuid::now_v7(),
                subject_code: subject_code.into(),
                faculty_id: faculty_id.into(),
                held_on: today - Days::new(days_ago),
                duration_hours,
                present: present.iter().map(|usn| usn.to_string()).collect(),
                strength: 3,
            });
        }
        Self {
            sessions: RwLock::new(sessions),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(new: &NewSession) -> AttendanceResult<()> {
    if new.subject_code.trim().is_empty() {
        return Err(AttendanceError::InvalidSession {
            field: "subject_code",
            reason: "must not be empty".into(),
        });
    }
    if new.faculty_id.trim().is_empty() {
        return Err(AttendanceError::InvalidSession {
            field: "faculty_id",
            reason: "must not be empty".into(),
        });
    }
    if new.duration_hours == 0 {
        return Err(AttendanceError::InvalidSession {
            field: "duration_hours",
            reason: "must be at least 1".into(),
        });
    }
    if new.strength == 0 {
        return Err(AttendanceError::InvalidSession {
            field: "strength",
            reason: "must be at least 1".into(),
        });
    }
    if new.present.len() > new.strength as usize {
        return Err(AttendanceError::InvalidSession {
            field: "present",
            reason: format!("{} marked present exceeds strength {}", new.present.len(), new.strength),
        });
    }
    Ok(())
}

#[async_trait]
impl AttendanceLedger for InMemoryLedger {
    async fn record(&self, new: NewSession) -> AttendanceResult<ClassSession> {
        validate(&new)?;
        let session = ClassSession {
            id: Uuid::now_v7(),
            subject_code: new.subject_code,
            faculty_id: new.faculty_id,
            held_on: new.held_on,
            duration_hours: new.duration_hours,
            present: new.present,
            strength: new.strength,
        };
        tracing::info!(
            subject = %session.subject_code,
            faculty = %session.faculty_id,
            present = session.present_count(),
            strength = session.strength,
            "class session recorded"
        );
        self.sessions.write().await.push(session.clone());
        Ok(session)
    }

    async fn sessions_for_faculty(&self, faculty_id: &str) -> AttendanceResult<Vec<ClassSession>> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|s| s.faculty_id.eq_ignore_ascii_case(faculty_id))
            .cloned()
            .collect())
    }

    async fn sessions_for_subject(&self, code: &str) -> AttendanceResult<Vec<ClassSession>> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|s| s.subject_code.eq_ignore_ascii_case(code))
            .cloned()
            .collect())
    }

    async fn all_sessions(&self) -> AttendanceResult<Vec<ClassSession>> {
        Ok(self.sessions.read().await.clone())
    }
}
