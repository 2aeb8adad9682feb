//! Chat session — a transcript bound to live directory handles.
//!
//! Each submitted message resolves against a fresh snapshot of the
//! directory, so replies always reflect the current roster rather than
//! the state at session start.

use std::sync::Arc;

use rc_attendance::StatsProvider;
use rc_protocol::{ChatMessage, ChatReply, FacultyRecord, StudentRecord, SubjectRecord};
use rc_roster::{FacultyRepository, RosterResult, StudentRepository, SubjectRepository};

use crate::config::AssistantConfig;
use crate::resolver::{QueryContext, Resolver};
use crate::templates;

pub struct ChatSession {
    resolver: Resolver,
    faculty: Arc<dyn FacultyRepository>,
    subjects: Arc<dyn SubjectRepository>,
    students: Arc<dyn StudentRepository>,
    stats: Option<Arc<dyn StatsProvider>>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(
        config: AssistantConfig,
        faculty: Arc<dyn FacultyRepository>,
        subjects: Arc<dyn SubjectRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            resolver: Resolver::new(config),
            faculty,
            subjects,
            students,
            stats: None,
            transcript: Vec::new(),
        }
    }

    /// Attach an attendance backend. Without one, attendance queries get
    /// the unavailable notice and student replies omit percentages.
    pub fn with_stats(mut self, provider: Arc<dyn StatsProvider>) -> Self {
        self.stats = Some(provider);
        self
    }

    /// Submit one user message and append both sides to the transcript.
    /// Never fails: a failed directory fetch yields the apology reply.
    pub async fn submit(&mut self, text: impl Into<String>) -> ChatReply {
        let text = text.into();
        self.transcript.push(ChatMessage::user(text.clone()));

        let reply = match self.snapshot().await {
            Ok((faculty, subjects, students)) => {
                let ctx = QueryContext {
                    faculty: &faculty,
                    subjects: &subjects,
                    students: &students,
                    stats: self.stats.as_deref(),
                };
                self.resolver.resolve(&text, ctx).await
            }
            Err(error) => {
                tracing::warn!(%error, "directory fetch failed");
                ChatReply::text(templates::PROVIDER_ERROR_MESSAGE)
            }
        };

        self.transcript.push(ChatMessage::assistant(reply.message.clone()));
        reply
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    async fn snapshot(
        &self,
    ) -> RosterResult<(Vec<FacultyRecord>, Vec<SubjectRecord>, Vec<StudentRecord>)> {
        let faculty = self.faculty.list().await?;
        let subjects = self.subjects.list().await?;
        let students = self.students.list().await?;
        Ok((faculty, subjects, students))
    }
}
