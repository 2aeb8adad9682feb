//! Query classification — ordered category patterns and identifier shapes.
//!
//! Categories are tested in declaration order and the first hit wins, so
//! "hello, show faculty" greets and "attendance report" goes to
//! attendance, never to stats. Word boundaries keep short keywords from
//! firing inside longer words ("hi" in "this", "present" in
//! "presentation").

use std::sync::LazyLock;

use regex::Regex;

use rc_protocol::is_usn_shaped;

/// Query categories, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Faculty,
    Subject,
    Attendance,
    Stats,
    Help,
    Search,
    Count,
    Credentials,
    Details,
}

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    [
        (
            Category::Greeting,
            r"\b(hi|hiya|hello|hey|namaste|good\s+(morning|afternoon|evening))\b",
        ),
        (
            Category::Faculty,
            r"\b(faculty|faculties|teachers?|professors?|staff)\b",
        ),
        (Category::Subject, r"\b(subjects?|courses?|syllabus)\b"),
        (
            Category::Attendance,
            r"\b(attendance|attended|absent|absentees|present)\b",
        ),
        (
            Category::Stats,
            r"\b(stats?|statistics|performance|average|percentage|report)\b",
        ),
        (Category::Help, r"\b(help|assist|support|guide)\b"),
        (
            Category::Search,
            r"\b(search|find|look\s*up|locate)\b|\bwho\s+is\b",
        ),
        (Category::Count, r"\b(count|total|how\s+many|number\s+of)\b"),
        (
            Category::Credentials,
            r"\b(credentials?|passwords?|logins?)\b",
        ),
        (Category::Details, r"\b(details?|info|information|about)\b"),
    ]
    .iter()
    .map(|(category, pattern)| (*category, Regex::new(&format!("(?i){pattern}")).unwrap()))
    .collect()
});

static RE_USN_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9]{10}\b").unwrap());

static RE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(count|total|how\s+many|number\s+of)\b").unwrap());

static RE_CREDENTIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(credentials?|passwords?|logins?)\b").unwrap());

static RE_DETAIL_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(details?|credentials?|passwords?|show|give|provide)\b").unwrap()
});

static RE_ATTENDANCE_ASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(attendance|attended|absent|absentees|present|stats?|statistics|performance|average|percentage|report)\b",
    )
    .unwrap()
});

static RE_SEARCH_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:search|find|look\s*up|locate|who\s+is)\b(?:\s+for)?\s+(.+)$").unwrap()
});

/// Classify a query to the first matching category.
pub fn classify(query: &str) -> Option<Category> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(query))
        .map(|(category, _)| *category)
}

/// First USN-shaped token in the query, if any.
pub fn find_usn_token(query: &str) -> Option<&str> {
    RE_USN_CANDIDATE
        .find_iter(query)
        .map(|m| m.as_str())
        .find(|token| is_usn_shaped(token))
}

/// Whitespace-separated tokens with surrounding punctuation trimmed, so
/// "FAC-101?" probes as "FAC-101" while inner characters (email dots,
/// hyphens) survive.
pub fn query_tokens(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .map(|token| {
            token.trim_matches(|c: char| {
                matches!(c, '?' | '!' | '.' | ',' | ';' | ':' | '"' | '\'' | '(' | ')')
            })
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Whether the query asks for a count rather than a listing.
pub fn wants_count(query: &str) -> bool {
    RE_COUNT.is_match(query)
}

/// Whether the query asks for login credentials.
pub fn wants_credentials(query: &str) -> bool {
    RE_CREDENTIALS.is_match(query)
}

/// Whether the query asks for full detail on a directly-matched record.
/// Broader than [`wants_credentials`]: "show", "give", and "provide"
/// count here.
pub fn wants_detail(query: &str) -> bool {
    RE_DETAIL_REQUEST.is_match(query)
}

/// Whether the query asks about attendance or teaching statistics.
pub fn wants_attendance(query: &str) -> bool {
    RE_ATTENDANCE_ASK.is_match(query)
}

/// Extract the term from "search for X", "find X", "who is X". Byte
/// offsets come from the case-insensitive match, so the term keeps the
/// user's casing.
pub fn extract_search_term(query: &str) -> Option<&str> {
    let captures = RE_SEARCH_TERM.captures(query)?;
    let term = captures
        .get(1)?
        .as_str()
        .trim()
        .trim_matches(|c: char| matches!(c, '?' | '!' | '.' | ',' | '"' | '\''));
    if term.is_empty() { None } else { Some(term) }
}
