//! Mock stats providers for testing — fixed figures and injected failures.

use async_trait::async_trait;
use std::collections::BTreeMap;

use rc_protocol::{AttendanceStats, SubjectStats};

use crate::error::{AttendanceError, AttendanceResult};
use crate::provider::StatsProvider;

/// Serves the same pre-set figures for every key.
pub struct FixedStatsProvider {
    stats: AttendanceStats,
    student_percent: Option<f64>,
}

impl FixedStatsProvider {
    pub fn new(stats: AttendanceStats) -> Self {
        Self {
            stats,
            student_percent: None,
        }
    }

    pub fn with_student_percent(mut self, percent: f64) -> Self {
        self.student_percent = Some(percent);
        self
    }

    /// A provider with one plausible teaching load.
    pub fn with_teaching_sample() -> Self {
        let mut per_subject = BTreeMap::new();
        per_subject.insert(
            "CS301".to_string(),
            SubjectStats {
                classes: 24,
                hours: 30,
                average_attendance: 82.0,
            },
        );
        per_subject.insert(
            "CS302".to_string(),
            SubjectStats {
                classes: 18,
                hours: 24,
                average_attendance: 71.5,
            },
        );
        Self::new(AttendanceStats {
            total_classes: 42,
            total_hours: 54,
            classes_this_month: 9,
            average_attendance: 77.5,
            per_subject,
        })
        .with_student_percent(85.0)
    }
}

#[async_trait]
impl StatsProvider for FixedStatsProvider {
    async fn faculty_stats(&self, _faculty_id: &str) -> AttendanceResult<AttendanceStats> {
        Ok(self.stats.clone())
    }

    async fn student_percentage(&self, _usn: &str) -> AttendanceResult<Option<f64>> {
        Ok(self.student_percent)
    }
}

/// Fails every call — exercises the assistant's apology path.
pub struct FailingStatsProvider;

#[async_trait]
impl StatsProvider for FailingStatsProvider {
    async fn faculty_stats(&self, _faculty_id: &str) -> AttendanceResult<AttendanceStats> {
        Err(AttendanceError::Provider("injected failure".into()))
    }

    async fn student_percentage(&self, _usn: &str) -> AttendanceResult<Option<f64>> {
        Err(AttendanceError::Provider("injected failure".into()))
    }
}
