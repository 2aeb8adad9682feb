//! Rule-based assistant for the attendance directory.
//!
//! Queries resolve deterministically: a direct identifier lookup first,
//! then ordered category patterns, then the help menu. No model calls,
//! no network, no randomness.

pub mod config;
pub mod patterns;
pub mod resolver;
pub mod session;
pub mod templates;

pub use config::{AssistantConfig, CredentialAccess};
pub use resolver::{QueryContext, Resolver};
pub use session::ChatSession;
