//! Session state and transition context

use super::message::Message;
use serde::Serialize;

/// The single in-memory conversation state for the running client.
///
/// `messages` and `pending` are owned exclusively by the session runtime;
/// everything else reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Ordered, append-only message log. Seeded with one assistant greeting.
    pub messages: Vec<Message>,
    /// True from acceptance of a send until its resolution is processed.
    pub pending: bool,
}

impl SessionState {
    pub fn new(greeting: &str) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
            pending: false,
        }
    }

    /// The most recent `window` messages, cloned as context payload for the
    /// next request. Computed before the new user message is appended.
    pub fn recent_context(&self, window: usize) -> Vec<Message> {
        let skip = self.messages.len().saturating_sub(window);
        self.messages.iter().skip(skip).cloned().collect()
    }
}

/// Inputs to the transition function that the session does not own: the
/// connectivity gate (read, never mutated here) and deployment settings.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Mirrored from the connectivity monitor at event-processing time.
    pub online: bool,
    /// Number of prior messages to attach as context.
    pub history_window: usize,
    /// Greeting text used for a fresh or cleared log.
    pub greeting: String,
}
