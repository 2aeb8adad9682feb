use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attendance::AttendanceStats;
use crate::faculty::FacultyRecord;
use crate::student::StudentRecord;
use crate::subject::SubjectRecord;

/// One entry in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Message text as typed or rendered.
    pub content: String,
    /// True for user turns, false for assistant turns.
    pub is_user: bool,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::turn(content, true)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::turn(content, false)
    }

    fn turn(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::now_v7(),
            content: content.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }
}

/// Structured payload attached to a reply.
///
/// Tagged so portal widgets can match on `kind` and render cards without
/// parsing the message text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyData {
    /// Text-only reply.
    #[default]
    None,
    /// Single faculty detail card.
    Faculty { record: FacultyRecord },
    /// Faculty directory listing.
    FacultyList { records: Vec<FacultyRecord> },
    /// Single subject detail card.
    Subject { record: SubjectRecord },
    /// Subject catalog listing.
    SubjectList { records: Vec<SubjectRecord> },
    /// Student detail card, with overall attendance when available.
    Student {
        record: StudentRecord,
        #[serde(skip_serializing_if = "Option::is_none")]
        attendance_percent: Option<f64>,
    },
    /// Cross-directory search hits, faculty group first.
    SearchResults {
        faculty: Vec<FacultyRecord>,
        subjects: Vec<SubjectRecord>,
    },
    /// Attendance aggregates for one faculty member.
    Stats {
        faculty_id: String,
        stats: AttendanceStats,
    },
    /// Directory sizes.
    Counts { faculty: usize, subjects: usize },
}

impl ReplyData {
    pub fn is_none(&self) -> bool {
        matches!(self, ReplyData::None)
    }
}

/// Assistant output for one query: rendered text plus optional structured
/// data and quick-reply suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Rendered reply text.
    pub message: String,
    /// Structured payload backing the text.
    #[serde(default, skip_serializing_if = "ReplyData::is_none")]
    pub data: ReplyData,
    /// Quick-reply suggestions, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ChatReply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: ReplyData::None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: ReplyData) -> Self {
        self.data = data;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}
