//! Assistant configuration.

use serde::Deserialize;

/// How much credential detail replies may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialAccess {
    /// Replies include plaintext passwords, matching the legacy admin
    /// portal behavior.
    #[default]
    Full,
    /// Passwords are masked in both reply text and structured payloads.
    Redacted,
}

/// Top-level assistant configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Credential exposure policy for faculty detail and credential
    /// replies (ROLLCALL_CREDENTIAL_ACCESS env var).
    #[serde(default)]
    pub credential_access: CredentialAccess,
    /// Attach quick-reply suggestions to menu-style replies.
    #[serde(default = "default_suggestions")]
    pub quick_reply_suggestions: bool,
}

fn default_suggestions() -> bool {
    true
}

impl AssistantConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let credential_access = std::env::var("ROLLCALL_CREDENTIAL_ACCESS")
            .map(|v| {
                if v.eq_ignore_ascii_case("redacted") {
                    CredentialAccess::Redacted
                } else {
                    CredentialAccess::Full
                }
            })
            .unwrap_or_default();
        Self {
            credential_access,
            ..Self::default()
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            credential_access: CredentialAccess::default(),
            quick_reply_suggestions: default_suggestions(),
        }
    }
}
