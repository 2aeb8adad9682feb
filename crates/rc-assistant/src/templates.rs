//! Reply templates — every string the assistant can say.
//!
//! Percentages are rounded half-up for display; raw values stay in the
//! structured payload. Markdown-ish bold and emoji match what the portal
//! chat widgets render.

use rc_protocol::{AttendanceStats, FacultyRecord, StudentRecord, SubjectRecord};

/// Help menu, also the fallback for anything unrecognized.
pub const HELP_MESSAGE: &str = r#"🤖 **Smart Attendance Assistant**

Here's what you can ask me:
• 👩‍🏫 Faculty — "show all faculty", "how many faculty"
• 📚 Subjects — "list subjects", "subject count"
• 📊 Attendance — "attendance for Priya Sharma"
• 🔍 Search — "search for CS101"
• 🎓 Students — paste a USN like "1MS21CS001"

Try one of the examples above!"#;

pub const GREETING_MESSAGE: &str = "👋 Hello! I'm your Smart Attendance assistant. Ask me about faculty, subjects, or attendance — or type \"help\" for examples.";

/// Onboarding nudge when the faculty directory is empty.
pub const NO_FACULTY_MESSAGE: &str = r#"👩‍🏫 **No faculty records yet**

Ask your HOD to add faculty from the dashboard (Manage Faculty → Add Faculty), then try again."#;

/// Onboarding nudge when the subject catalog is empty.
pub const NO_SUBJECTS_MESSAGE: &str = r#"📚 **No subjects on record yet**

Add subjects from the HOD dashboard (Manage Subjects → Add Subject), then try again."#;

/// Fixed apology for any failed data fetch.
pub const PROVIDER_ERROR_MESSAGE: &str =
    "⚠️ An error occurred while fetching data. Please try again.";

/// Attendance asked for a known faculty, but no stats provider is wired.
pub const STATS_UNAVAILABLE_MESSAGE: &str =
    "📊 Attendance data isn't connected right now. Please try again later.";

/// Search category without a usable term.
pub const SEARCH_PROMPT_MESSAGE: &str =
    "🔍 What should I search for? Try \"search for CS101\" or a faculty name.";

/// Details category without a resolvable entity.
pub const DETAILS_PROMPT_MESSAGE: &str =
    "ℹ️ Tell me which faculty, subject, or student you mean — a name, code, or USN works.";

/// Round-half-up display rounding: 74.5 renders as 75.
pub fn round_percent(value: f64) -> i64 {
    value.round() as i64
}

pub fn greeting_suggestions() -> Vec<String> {
    vec![
        "Show all faculty".into(),
        "List subjects".into(),
        "Help".into(),
    ]
}

pub fn help_suggestions() -> Vec<String> {
    vec![
        "Show all faculty".into(),
        "List subjects".into(),
        "Search for CS101".into(),
    ]
}

pub fn faculty_list(records: &[FacultyRecord]) -> String {
    let mut out = format!("👩‍🏫 **Faculty Directory** ({})\n", records.len());
    for record in records {
        out.push_str(&format!(
            "\n• {} ({}) — {} subject(s)",
            record.name,
            record.faculty_id,
            record.assigned_subjects.len()
        ));
    }
    out
}

pub fn faculty_detail(record: &FacultyRecord, include_password: bool) -> String {
    let subjects = if record.assigned_subjects.is_empty() {
        "none assigned".to_string()
    } else {
        record.assigned_subjects.join(", ")
    };
    let mut out = format!(
        "👩‍🏫 **{}**\n\n• ID: {}\n• Email: {}\n• Subjects: {}\n• Joined: {}",
        record.name,
        record.faculty_id,
        record.email,
        subjects,
        record.created_at.format("%Y-%m-%d"),
    );
    if include_password {
        out.push_str(&format!("\n• Password: {}", record.password));
    }
    out
}

/// Credential enumeration. Callers apply the redaction policy to the
/// records before rendering.
pub fn faculty_credentials(records: &[FacultyRecord]) -> String {
    let mut out = format!("🔐 **Faculty Credentials** ({})\n", records.len());
    for record in records {
        out.push_str(&format!(
            "\n• {} — {} / {}",
            record.name, record.email, record.password
        ));
    }
    out
}

pub fn subject_list(records: &[SubjectRecord]) -> String {
    let mut out = format!("📚 **Subject Catalog** ({})\n", records.len());
    for record in records {
        out.push_str(&format!(
            "\n• {} — {} (sem {}, {} credits)",
            record.code, record.name, record.semester, record.credits
        ));
    }
    out
}

pub fn subject_detail(record: &SubjectRecord) -> String {
    format!(
        "📚 **{} ({})**\n\n• Semester: {}\n• Credits: {}\n• Faculty: {}\n• Added: {}",
        record.name,
        record.code,
        record.semester,
        record.credits,
        record.faculty_name.as_deref().unwrap_or("not assigned"),
        record.created_at.format("%Y-%m-%d"),
    )
}

pub fn student_detail(record: &StudentRecord, attendance_percent: Option<f64>) -> String {
    let mut out = format!(
        "🎓 **{}** ({})\n\n• Email: {}\n• Semester: {}\n• Section: {}",
        record.name,
        record.usn.to_uppercase(),
        record.email,
        record.semester,
        record.section,
    );
    if let Some(percent) = attendance_percent {
        out.push_str(&format!("\n• Attendance: {}%", round_percent(percent)));
    }
    out
}

pub fn usn_not_found(token: &str) -> String {
    format!("🔎 No student matches \"{token}\". Check the USN and try again.")
}

pub fn stats_detail(name: &str, stats: &AttendanceStats) -> String {
    let mut out = format!(
        "📊 **Attendance — {}**\n\n• Total classes: {}\n• Total hours: {}\n• Classes this month: {}\n• Average attendance: {}%",
        name,
        stats.total_classes,
        stats.total_hours,
        stats.classes_this_month,
        round_percent(stats.average_attendance),
    );
    if !stats.per_subject.is_empty() {
        out.push_str("\n\nPer subject:");
        for (code, subject) in &stats.per_subject {
            out.push_str(&format!(
                "\n• {}: {} classes, {} hrs, {}%",
                code,
                subject.classes,
                subject.hours,
                round_percent(subject.average_attendance)
            ));
        }
    }
    out
}

pub fn attendance_guidance(example_name: Option<&str>) -> String {
    format!(
        "📊 Tell me whose attendance you need — for example \"attendance for {}\".",
        example_name.unwrap_or("a faculty member")
    )
}

/// Search hits grouped faculty-first; empty groups are omitted.
pub fn search_results(term: &str, faculty: &[FacultyRecord], subjects: &[SubjectRecord]) -> String {
    let mut out = format!("🔍 **Search results for \"{term}\"**");
    if !faculty.is_empty() {
        out.push_str("\n\n👩‍🏫 Faculty:");
        for record in faculty {
            out.push_str(&format!("\n• {} ({})", record.name, record.faculty_id));
        }
    }
    if !subjects.is_empty() {
        out.push_str("\n\n📚 Subjects:");
        for record in subjects {
            out.push_str(&format!("\n• {} — {}", record.code, record.name));
        }
    }
    out
}

pub fn search_no_matches(term: &str) -> String {
    format!("🔍 No faculty or subjects match \"{term}\".")
}

pub fn counts(faculty: usize, subjects: usize) -> String {
    format!("📊 **Directory counts**\n\n• Faculty: {faculty}\n• Subjects: {subjects}")
}

pub fn faculty_count(count: usize) -> String {
    format!("👩‍🏫 There are {count} faculty members on record.")
}

pub fn subject_count(count: usize) -> String {
    format!("📚 There are {count} subjects on record.")
}
