//! Stats provider — the async boundary the assistant consumes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use rc_protocol::AttendanceStats;
use rc_roster::{StudentRepository, SubjectRepository};

use crate::error::AttendanceResult;
use crate::ledger::AttendanceLedger;
use crate::stats;

/// Read-only attendance figures, keyed the way the assistant asks for
/// them: by faculty ID for teaching stats, by USN for a student's overall
/// percentage.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Aggregates for one faculty member. Zeros when nothing is recorded.
    async fn faculty_stats(&self, faculty_id: &str) -> AttendanceResult<AttendanceStats>;

    /// Overall attendance percentage for one student, `None` when no
    /// sessions apply to them.
    async fn student_percentage(&self, usn: &str) -> AttendanceResult<Option<f64>>;
}

/// Provider backed by the session ledger and the directory.
pub struct LedgerStatsProvider {
    ledger: Arc<dyn AttendanceLedger>,
    subjects: Arc<dyn SubjectRepository>,
    students: Arc<dyn StudentRepository>,
}

impl LedgerStatsProvider {
    pub fn new(
        ledger: Arc<dyn AttendanceLedger>,
        subjects: Arc<dyn SubjectRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            ledger,
            subjects,
            students,
        }
    }
}

#[async_trait]
impl StatsProvider for LedgerStatsProvider {
    async fn faculty_stats(&self, faculty_id: &str) -> AttendanceResult<AttendanceStats> {
        let sessions = self.ledger.sessions_for_faculty(faculty_id).await?;
        Ok(stats::aggregate(&sessions, Utc::now()))
    }

    async fn student_percentage(&self, usn: &str) -> AttendanceResult<Option<f64>> {
        let Some(student) = self.students.find_by_usn(usn).await? else {
            return Ok(None);
        };

        // A student's denominator is every session held for a subject in
        // their semester, whether or not they showed up.
        let subjects = self.subjects.list().await?;
        let codes: Vec<&str> = subjects
            .iter()
            .filter(|s| s.semester == student.semester)
            .map(|s| s.code.as_str())
            .collect();

        let sessions: Vec<_> = self
            .ledger
            .all_sessions()
            .await?
            .into_iter()
            .filter(|s| codes.iter().any(|c| c.eq_ignore_ascii_case(&s.subject_code)))
            .collect();

        Ok(stats::student_share(&sessions, &student.usn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rc_roster::InMemoryRoster;

    use crate::ledger::{InMemoryLedger, NewSession};

    fn new_session(code: &str, faculty: &str, day: u32, present: Vec<String>) -> NewSession {
        NewSession {
            subject_code: code.into(),
            faculty_id: faculty.into(),
            held_on: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            duration_hours: 1,
            present,
            strength: 30,
        }
    }

    async fn seeded_provider() -> LedgerStatsProvider {
        let roster = Arc::new(InMemoryRoster::with_sample_data());
        let ledger = Arc::new(InMemoryLedger::new());

        // Semester 3 subjects: CS301 and CS302. Ananya (1MS21CS001)
        // attends three of four sessions.
        for new in [
            new_session("CS301", "FAC-101", 10, vec!["1MS21CS001".into(), "1MS21CS002".into()]),
            new_session("CS301", "FAC-101", 11, vec!["1MS21CS001".into()]),
            new_session("CS302", "FAC-101", 12, vec!["1MS21CS002".into()]),
            new_session("CS302", "FAC-101", 13, vec!["1MS21CS001".into()]),
            // Semester 5 subject, irrelevant to semester 3 students.
            new_session("CS303", "FAC-102", 14, vec!["1MS21CS003".into()]),
        ] {
            ledger.record(new).await.unwrap();
        }

        LedgerStatsProvider::new(ledger, roster.clone(), roster)
    }

    #[tokio::test]
    async fn faculty_stats_cover_only_their_sessions() {
        let provider = seeded_provider().await;
        let stats = provider.faculty_stats("FAC-101").await.unwrap();
        assert_eq!(stats.total_classes, 4);
        assert_eq!(stats.per_subject.len(), 2);

        let other = provider.faculty_stats("FAC-102").await.unwrap();
        assert_eq!(other.total_classes, 1);
    }

    #[tokio::test]
    async fn faculty_without_sessions_gets_zeros() {
        let provider = seeded_provider().await;
        let stats = provider.faculty_stats("FAC-103").await.unwrap();
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.average_attendance, 0.0);
    }

    #[tokio::test]
    async fn student_percentage_scoped_to_their_semester() {
        let provider = seeded_provider().await;
        // 3 of the 4 semester-3 sessions; CS303 never counts against her.
        let percent = provider.student_percentage("1MS21CS001").await.unwrap();
        assert_eq!(percent, Some(75.0));
    }

    #[tokio::test]
    async fn unknown_student_yields_none() {
        let provider = seeded_provider().await;
        assert_eq!(provider.student_percentage("9XX99XX999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn student_with_no_applicable_sessions_yields_none() {
        let roster = Arc::new(InMemoryRoster::with_sample_data());
        let ledger = Arc::new(InMemoryLedger::new());
        let provider = LedgerStatsProvider::new(ledger, roster.clone(), roster);
        assert_eq!(provider.student_percentage("1MS21CS001").await.unwrap(), None);
    }
}
