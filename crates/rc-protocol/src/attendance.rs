use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One held class with its roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    /// Unique session ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Subject taught in this session.
    pub subject_code: String,
    /// Faculty who took the class.
    pub faculty_id: String,
    /// Calendar date the class was held on.
    pub held_on: NaiveDate,
    /// Duration in whole hours.
    pub duration_hours: u32,
    /// USNs of the students marked present.
    pub present: Vec<String>,
    /// Enrolled class strength the roll was taken against.
    pub strength: u32,
}

impl ClassSession {
    pub fn present_count(&self) -> u32 {
        self.present.len() as u32
    }

    /// Percentage of the class present, 0.0 when strength is zero.
    pub fn attendance_percent(&self) -> f64 {
        if self.strength == 0 {
            return 0.0;
        }
        f64::from(self.present_count()) / f64::from(self.strength) * 100.0
    }
}

/// Per-subject slice of a faculty's attendance aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub classes: u32,
    pub hours: u32,
    pub average_attendance: f64,
}

/// Aggregate attendance view for one faculty member.
///
/// Percentages are raw f64 values; display rounding happens at the
/// template layer only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Classes taken across all subjects.
    pub total_classes: u32,
    /// Teaching hours across all subjects.
    pub total_hours: u32,
    /// Classes held in the current calendar month.
    pub classes_this_month: u32,
    /// Unweighted mean of per-session attendance percentages.
    pub average_attendance: f64,
    /// Breakdown keyed by subject code, in code order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub per_subject: BTreeMap<String, SubjectStats>,
}

impl AttendanceStats {
    /// Stats for a faculty with no recorded sessions.
    pub fn empty() -> Self {
        Self {
            total_classes: 0,
            total_hours: 0,
            classes_this_month: 0,
            average_attendance: 0.0,
            per_subject: BTreeMap::new(),
        }
    }
}
