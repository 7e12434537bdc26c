//! Events that drive the session state machine

use crate::gateway::{GatewayError, ReplyOutcome};

/// Events that trigger state transitions.
#[derive(Debug)]
pub enum Event {
    /// Raw input submitted from the chat surface.
    UserMessage { text: String },

    /// Resolution of the single in-flight gateway request. Posted exactly
    /// once per accepted send, on success and on failure alike.
    ReplyResolved {
        outcome: Result<ReplyOutcome, GatewayError>,
    },

    /// Replace the log with a fresh greeting.
    Clear,
}
