//! Effects produced by state transitions

use super::message::Message;

/// Effects to be executed by the runtime after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Invoke the gateway with the trimmed text and the recent context
    /// slice. Resolution comes back as `Event::ReplyResolved`.
    RequestReply {
        text: String,
        history: Vec<Message>,
    },
}
