//! Attendance aggregation — pure functions from session lists to stats.
//!
//! All percentages stay as raw f64 here; rounding for display is the
//! assistant's job.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use rc_protocol::{AttendanceStats, ClassSession, SubjectStats};

/// Aggregate a faculty's sessions into `AttendanceStats`.
///
/// `now` anchors the classes-this-month window, so callers (and tests)
/// control the clock.
pub fn aggregate(sessions: &[ClassSession], now: DateTime<Utc>) -> AttendanceStats {
    if sessions.is_empty() {
        return AttendanceStats::empty();
    }

    let mut per_subject: BTreeMap<String, (u32, u32, f64)> = BTreeMap::new();
    let mut total_hours = 0u32;
    let mut classes_this_month = 0u32;
    let mut percent_sum = 0.0f64;

    for session in sessions {
        total_hours += session.duration_hours;
        if session.held_on.year() == now.year() && session.held_on.month() == now.month() {
            classes_this_month += 1;
        }
        percent_sum += session.attendance_percent();

        let entry = per_subject
            .entry(session.subject_code.clone())
            .or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 += session.duration_hours;
        entry.2 += session.attendance_percent();
    }

    AttendanceStats {
        total_classes: sessions.len() as u32,
        total_hours,
        classes_this_month,
        average_attendance: percent_sum / sessions.len() as f64,
        per_subject: per_subject
            .into_iter()
            .map(|(code, (classes, hours, sum))| {
                (
                    code,
                    SubjectStats {
                        classes,
                        hours,
                        average_attendance: sum / f64::from(classes),
                    },
                )
            })
            .collect(),
    }
}

/// Share of `sessions` that have `usn` on the roll, as a percentage.
/// `None` when no sessions apply.
pub fn student_share(sessions: &[ClassSession], usn: &str) -> Option<f64> {
    if sessions.is_empty() {
        return None;
    }
    let attended = sessions
        .iter()
        .filter(|s| s.present.iter().any(|p| p.eq_ignore_ascii_case(usn)))
        .count();
    Some(attended as f64 / sessions.len() as f64 * 100.0)
}
