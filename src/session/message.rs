//! Message log entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// A single entry in the conversation log. Immutable once created; the log
/// itself is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    /// True only for assistant messages synthesized from a failure path.
    #[serde(default)]
    pub error: bool,
}

impl Message {
    fn new(text: impl Into<String>, author: Author, error: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author,
            created_at: Utc::now(),
            error,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Author::User, false)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Author::Assistant, false)
    }

    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self::new(text, Author::Assistant, true)
    }
}
