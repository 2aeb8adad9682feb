//! Intent resolver — maps free-text queries onto directory replies.
//!
//! Resolution runs in tiers: direct identifier lookup first (a seat
//! number, faculty ID, email, code, or name is unambiguous), then the
//! ordered category patterns, then the help-menu fallback. The resolver
//! holds no state besides configuration; every call works against the
//! snapshot in `QueryContext`.

use rc_attendance::StatsProvider;
use rc_protocol::{ChatReply, FacultyRecord, ReplyData, StudentRecord, SubjectRecord};

use crate::config::{AssistantConfig, CredentialAccess};
use crate::patterns::{self, Category};
use crate::templates;

/// Read-only data one `resolve` call works against.
#[derive(Clone, Copy)]
pub struct QueryContext<'a> {
    pub faculty: &'a [FacultyRecord],
    pub subjects: &'a [SubjectRecord],
    pub students: &'a [StudentRecord],
    /// Attendance backend; `None` renders the unavailable notice instead
    /// of stats.
    pub stats: Option<&'a dyn StatsProvider>,
}

/// Stateless query resolver.
pub struct Resolver {
    config: AssistantConfig,
}

impl Resolver {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    /// Resolve one query. Never fails: data-provider errors surface as
    /// the fixed apology reply.
    pub async fn resolve(&self, query: &str, ctx: QueryContext<'_>) -> ChatReply {
        let query = query.trim();

        if let Some(reply) = self.resolve_identifier(query, ctx).await {
            return reply;
        }

        let category = patterns::classify(query);
        if let Some(category) = category {
            tracing::debug!(?category, "category matched");
        }

        match category {
            Some(Category::Greeting) => {
                self.menu_reply(templates::GREETING_MESSAGE, templates::greeting_suggestions())
            }
            Some(Category::Faculty) => self.faculty_category(query, ctx),
            Some(Category::Subject) => self.subject_category(query, ctx),
            Some(Category::Attendance) | Some(Category::Stats) => self.attendance_category(ctx),
            Some(Category::Help) => {
                self.menu_reply(templates::HELP_MESSAGE, templates::help_suggestions())
            }
            Some(Category::Search) => self.search_category(query, ctx),
            Some(Category::Count) => counts_reply(ctx),
            Some(Category::Credentials) => self.credentials_reply(ctx),
            Some(Category::Details) => ChatReply::text(templates::DETAILS_PROMPT_MESSAGE),
            None => {
                tracing::debug!(query, "no category matched, serving help menu");
                self.menu_reply(templates::HELP_MESSAGE, templates::help_suggestions())
            }
        }
    }

    // ── Direct identifier lookup ────────────────────────────────

    /// A USN-shaped token is terminal: it answers with either the student
    /// detail or the not-found notice, never falling through to the
    /// categories. The remaining probes fall through on a miss.
    async fn resolve_identifier(&self, query: &str, ctx: QueryContext<'_>) -> Option<ChatReply> {
        if let Some(token) = patterns::find_usn_token(query) {
            tracing::debug!(token, "usn-shaped token takes the student path");
            return Some(self.student_reply(token, ctx).await);
        }

        let tokens = patterns::query_tokens(query);

        for token in &tokens {
            if let Some(record) = ctx.faculty.iter().find(|f| {
                f.faculty_id.eq_ignore_ascii_case(token) || f.email.eq_ignore_ascii_case(token)
            }) {
                return Some(self.faculty_hit_reply(record, query, ctx).await);
            }
        }

        for token in &tokens {
            if let Some(record) = ctx.subjects.iter().find(|s| s.code.eq_ignore_ascii_case(token)) {
                return Some(subject_detail_reply(record));
            }
        }

        if let Some(record) = find_faculty_by_name(query, &tokens, ctx.faculty) {
            return Some(self.faculty_hit_reply(record, query, ctx).await);
        }

        if let Some(record) = find_subject_by_name(query, ctx.subjects) {
            return Some(subject_detail_reply(record));
        }

        None
    }

    /// A directly-matched faculty renders the attendance view when the
    /// query carries attendance vocabulary, the detail view otherwise.
    async fn faculty_hit_reply(
        &self,
        record: &FacultyRecord,
        query: &str,
        ctx: QueryContext<'_>,
    ) -> ChatReply {
        if patterns::wants_attendance(query) {
            return self.faculty_stats_reply(record, ctx).await;
        }

        let include_password = patterns::wants_detail(query);
        let shown = self.policy_record(record);
        let message = templates::faculty_detail(&shown, include_password);
        ChatReply::text(message).with_data(ReplyData::Faculty { record: shown })
    }

    async fn faculty_stats_reply(
        &self,
        record: &FacultyRecord,
        ctx: QueryContext<'_>,
    ) -> ChatReply {
        let Some(provider) = ctx.stats else {
            return ChatReply::text(templates::STATS_UNAVAILABLE_MESSAGE);
        };
        match provider.faculty_stats(&record.faculty_id).await {
            Ok(stats) => {
                let message = templates::stats_detail(&record.name, &stats);
                ChatReply::text(message).with_data(ReplyData::Stats {
                    faculty_id: record.faculty_id.clone(),
                    stats,
                })
            }
            Err(error) => {
                tracing::warn!(%error, faculty_id = %record.faculty_id, "stats provider failed");
                ChatReply::text(templates::PROVIDER_ERROR_MESSAGE)
            }
        }
    }

    async fn student_reply(&self, token: &str, ctx: QueryContext<'_>) -> ChatReply {
        let Some(record) = ctx
            .students
            .iter()
            .find(|s| s.usn.eq_ignore_ascii_case(token))
        else {
            tracing::debug!(token, "usn-shaped token matched no student");
            return ChatReply::text(templates::usn_not_found(token));
        };

        let attendance_percent = match ctx.stats {
            Some(provider) => match provider.student_percentage(&record.usn).await {
                Ok(value) => value,
                Err(error) => {
                    tracing::warn!(%error, usn = %record.usn, "stats provider failed");
                    return ChatReply::text(templates::PROVIDER_ERROR_MESSAGE);
                }
            },
            None => None,
        };

        ChatReply::text(templates::student_detail(record, attendance_percent)).with_data(
            ReplyData::Student {
                record: record.clone(),
                attendance_percent,
            },
        )
    }

    // ── Category handlers ───────────────────────────────────────

    fn faculty_category(&self, query: &str, ctx: QueryContext<'_>) -> ChatReply {
        if ctx.faculty.is_empty() {
            return ChatReply::text(templates::NO_FACULTY_MESSAGE);
        }
        if patterns::wants_count(query) {
            return ChatReply::text(templates::faculty_count(ctx.faculty.len())).with_data(
                ReplyData::Counts {
                    faculty: ctx.faculty.len(),
                    subjects: ctx.subjects.len(),
                },
            );
        }
        if patterns::wants_credentials(query) {
            return self.credentials_reply(ctx);
        }
        let records: Vec<FacultyRecord> =
            ctx.faculty.iter().map(|r| self.policy_record(r)).collect();
        ChatReply::text(templates::faculty_list(&records))
            .with_data(ReplyData::FacultyList { records })
    }

    fn subject_category(&self, query: &str, ctx: QueryContext<'_>) -> ChatReply {
        if ctx.subjects.is_empty() {
            return ChatReply::text(templates::NO_SUBJECTS_MESSAGE);
        }
        if patterns::wants_count(query) {
            return ChatReply::text(templates::subject_count(ctx.subjects.len())).with_data(
                ReplyData::Counts {
                    faculty: ctx.faculty.len(),
                    subjects: ctx.subjects.len(),
                },
            );
        }
        let records = ctx.subjects.to_vec();
        ChatReply::text(templates::subject_list(&records))
            .with_data(ReplyData::SubjectList { records })
    }

    /// Reached only when no faculty was named; a named faculty is caught
    /// by the direct lookup.
    fn attendance_category(&self, ctx: QueryContext<'_>) -> ChatReply {
        let example = ctx.faculty.first().map(|f| f.name.as_str());
        ChatReply::text(templates::attendance_guidance(example))
    }

    fn search_category(&self, query: &str, ctx: QueryContext<'_>) -> ChatReply {
        let Some(term) = patterns::extract_search_term(query) else {
            return ChatReply::text(templates::SEARCH_PROMPT_MESSAGE);
        };
        let needle = term.to_lowercase();

        let faculty: Vec<FacultyRecord> = ctx
            .faculty
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.faculty_id.to_lowercase().contains(&needle)
                    || f.email.to_lowercase().contains(&needle)
            })
            .map(|r| self.policy_record(r))
            .collect();
        let subjects: Vec<SubjectRecord> = ctx
            .subjects
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle) || s.code.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        if faculty.is_empty() && subjects.is_empty() {
            tracing::debug!(term, "search matched nothing");
            return ChatReply::text(templates::search_no_matches(term));
        }
        ChatReply::text(templates::search_results(term, &faculty, &subjects))
            .with_data(ReplyData::SearchResults { faculty, subjects })
    }

    fn credentials_reply(&self, ctx: QueryContext<'_>) -> ChatReply {
        if ctx.faculty.is_empty() {
            return ChatReply::text(templates::NO_FACULTY_MESSAGE);
        }
        let records: Vec<FacultyRecord> =
            ctx.faculty.iter().map(|r| self.policy_record(r)).collect();
        ChatReply::text(templates::faculty_credentials(&records))
            .with_data(ReplyData::FacultyList { records })
    }

    // ── Helpers ─────────────────────────────────────────────────

    fn menu_reply(&self, message: &str, suggestions: Vec<String>) -> ChatReply {
        let reply = ChatReply::text(message);
        if self.config.quick_reply_suggestions {
            reply.with_suggestions(suggestions)
        } else {
            reply
        }
    }

    fn policy_record(&self, record: &FacultyRecord) -> FacultyRecord {
        match self.config.credential_access {
            CredentialAccess::Full => record.clone(),
            CredentialAccess::Redacted => record.redacted(),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(AssistantConfig::default())
    }
}

fn counts_reply(ctx: QueryContext<'_>) -> ChatReply {
    ChatReply::text(templates::counts(ctx.faculty.len(), ctx.subjects.len())).with_data(
        ReplyData::Counts {
            faculty: ctx.faculty.len(),
            subjects: ctx.subjects.len(),
        },
    )
}

fn subject_detail_reply(record: &SubjectRecord) -> ChatReply {
    ChatReply::text(templates::subject_detail(record)).with_data(ReplyData::Subject {
        record: record.clone(),
    })
}

/// Faculty whose full name occurs in the query, or failing that, one of
/// whose name words (3+ chars, honorifics excluded) equals a query token.
fn find_faculty_by_name<'a>(
    query: &str,
    tokens: &[&str],
    faculty: &'a [FacultyRecord],
) -> Option<&'a FacultyRecord> {
    let lower = query.to_lowercase();
    if let Some(record) = faculty
        .iter()
        .find(|f| f.name.len() >= 3 && lower.contains(&f.name.to_lowercase()))
    {
        return Some(record);
    }
    faculty.iter().find(|f| {
        f.name.split_whitespace().any(|word| {
            let word = word.trim_matches('.');
            word.len() >= 3 && tokens.iter().any(|t| t.eq_ignore_ascii_case(word))
        })
    })
}

fn find_subject_by_name<'a>(
    query: &str,
    subjects: &'a [SubjectRecord],
) -> Option<&'a SubjectRecord> {
    let lower = query.to_lowercase();
    subjects
        .iter()
        .find(|s| s.name.len() >= 3 && lower.contains(&s.name.to_lowercase()))
}
