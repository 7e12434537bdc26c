//! API request and response types

use crate::session::{Author, Message};
use crate::timefmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response for the chat action. `accepted` is false when the session
/// silently ignored the send (empty text, request pending, or offline).
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub accepted: bool,
}

/// Connectivity transition forwarded by the host environment
#[derive(Debug, Deserialize)]
pub struct ConnectivityRequest {
    pub online: bool,
}

/// A message as rendered on the wire, with display timings precomputed
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub error: bool,
    /// Wall-clock "HH:MM" rendering.
    pub time: String,
    /// Coarse age relative to the snapshot time.
    pub age: String,
}

impl MessageView {
    pub fn from_message(message: Message, now: DateTime<Utc>) -> Self {
        Self {
            time: timefmt::absolute(message.created_at),
            age: timefmt::relative(message.created_at, now),
            id: message.id,
            text: message.text,
            author: message.author,
            created_at: message.created_at,
            error: message.error,
        }
    }
}

/// Response with the full session snapshot
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub messages: Vec<MessageView>,
    pub pending: bool,
    pub online: bool,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
