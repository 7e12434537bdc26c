//! Core conversation session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
mod message;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use message::{Author, Message};
pub use state::{SessionContext, SessionState};
pub use transition::{
    transition, SendRejection, TransitionResult, FALLBACK_REPLY, OFFLINE_REPLY, UNREACHABLE_REPLY,
};
