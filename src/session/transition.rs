//! Pure state transition function
//!
//! Given the same state, context, and event this always produces the same
//! log contents and effects, with no I/O.

use super::effect::Effect;
use super::event::Event;
use super::message::Message;
use super::state::{SessionContext, SessionState};
use crate::gateway::{GatewayError, ReplyOutcome};

/// Fallback used when a successful response carries no reply text.
pub const FALLBACK_REPLY: &str = "Sorry, I can't answer that right now.";

/// Shown when the request never reached the service.
pub const UNREACHABLE_REPLY: &str =
    "Sorry, I couldn't reach the service. Please try again later.";

/// Takes precedence over the transport message when the host reports
/// offline at classification time.
pub const OFFLINE_REPLY: &str =
    "You appear to be offline. Check your connection and try again.";

/// Why a send was ignored. Informational only: a rejected send appends
/// nothing, makes no request, and raises no error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    EmptyText,
    RequestPending,
    Offline,
}

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
    /// Set when a send was silently ignored; `new_state` equals the input
    /// state in that case.
    pub rejected: Option<SendRejection>,
}

impl TransitionResult {
    fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
            rejected: None,
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    fn ignored(state: &SessionState, reason: SendRejection) -> Self {
        Self {
            new_state: state.clone(),
            effects: vec![],
            rejected: Some(reason),
        }
    }
}

pub fn transition(
    state: &SessionState,
    context: &SessionContext,
    event: Event,
) -> TransitionResult {
    match event {
        Event::UserMessage { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return TransitionResult::ignored(state, SendRejection::EmptyText);
            }
            if state.pending {
                return TransitionResult::ignored(state, SendRejection::RequestPending);
            }
            if !context.online {
                return TransitionResult::ignored(state, SendRejection::Offline);
            }

            // Context slice reflects the log before this message is added.
            let history = state.recent_context(context.history_window);

            let mut new_state = state.clone();
            new_state.messages.push(Message::user(trimmed));
            new_state.pending = true;

            TransitionResult::new(new_state).with_effect(Effect::RequestReply {
                text: trimmed.to_string(),
                history,
            })
        }

        Event::ReplyResolved { outcome } => {
            // Exactly one assistant message per resolution, and pending is
            // cleared on every path.
            let mut new_state = state.clone();
            new_state.messages.push(reply_message(outcome, context.online));
            new_state.pending = false;
            TransitionResult::new(new_state)
        }

        Event::Clear => {
            // Pending is left untouched: an in-flight request is not
            // cancelled and its resolution still appends to the fresh log.
            let mut new_state = state.clone();
            new_state.messages = vec![Message::assistant(&context.greeting)];
            TransitionResult::new(new_state)
        }
    }
}

fn reply_message(outcome: Result<ReplyOutcome, GatewayError>, online: bool) -> Message {
    match outcome {
        Ok(result) => match result.reply.filter(|text| !text.trim().is_empty()) {
            Some(text) => Message::assistant(text),
            // Degraded success: the exchange completed without the expected
            // payload field.
            None => Message::assistant(FALLBACK_REPLY),
        },
        Err(GatewayError::Transport(_)) if !online => Message::assistant_error(OFFLINE_REPLY),
        Err(GatewayError::Transport(_)) => Message::assistant_error(UNREACHABLE_REPLY),
        Err(GatewayError::Http {
            status,
            status_text,
        }) => Message::assistant_error(format!(
            "The service returned an error (HTTP {status} {status_text}). Please try again."
        )),
    }
}
