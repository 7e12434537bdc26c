//! Wire types for the chat endpoint

use crate::session::{Author, Message};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body. The endpoint requires `message`; the rest is context
/// metadata it may ignore.
#[derive(Debug, Serialize)]
pub(super) struct GenerateRequest<'a> {
    pub message: &'a str,
    pub history: Vec<HistoryEntry<'a>>,
    pub timestamp: DateTime<Utc>,
    pub platform: &'a str,
}

/// One prior exchange entry, flattened for the wire.
#[derive(Debug, Serialize)]
pub(super) struct HistoryEntry<'a> {
    pub text: &'a str,
    pub from_user: bool,
}

impl<'a> HistoryEntry<'a> {
    pub fn from_message(message: &'a Message) -> Self {
        Self {
            text: &message.text,
            from_user: message.author == Author::User,
        }
    }
}

/// Decoded success body. Deployments differ on the reply field name, so
/// both spellings are accepted.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl GenerateResponse {
    /// First non-blank reply field, if any.
    pub fn into_reply(self) -> Option<String> {
        self.response
            .into_iter()
            .chain(self.generated_text)
            .find(|text| !text.trim().is_empty())
    }
}

/// Outcome of a successful exchange. `reply: None` is the degraded-success
/// case; the session substitutes fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyOutcome {
    pub reply: Option<String>,
}
