//! Runtime executing the conversation session
//!
//! A single event loop owns all state mutation; suspension happens only in
//! the spawned gateway request task, so appends and the pending toggle are
//! atomic with respect to each other.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::SessionRuntime;
pub use traits::ReplyClient;

use crate::gateway::{GatewayError, ReplyOutcome};
use crate::session::{SendRejection, SessionState};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, RwLock};

/// Shared read-only view of the session state.
pub(crate) type SharedState = Arc<RwLock<SessionState>>;

/// Error returned when the runtime task is no longer running.
#[derive(Debug, Error)]
#[error("session runtime is not running")]
pub struct RuntimeGone;

/// Commands accepted by the runtime loop. Resolutions of in-flight requests
/// travel through the same queue as user commands, which is what serializes
/// all log mutation.
#[derive(Debug)]
pub(crate) enum Command {
    Send {
        text: String,
        ack: oneshot::Sender<Option<SendRejection>>,
    },
    Clear,
    Resolved {
        outcome: Result<ReplyOutcome, GatewayError>,
    },
}

/// Handle used by the HTTP surface to command the session and read state.
/// All mutation goes through the command queue; the handle never writes.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    state: SharedState,
}

impl SessionHandle {
    /// Submit raw input. Returns the rejection reason when the session
    /// ignored the send; `None` means it was accepted.
    pub async fn send(&self, text: String) -> Result<Option<SendRejection>, RuntimeGone> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Send { text, ack: ack_tx })
            .await
            .map_err(|_| RuntimeGone)?;
        ack_rx.await.map_err(|_| RuntimeGone)
    }

    /// Reset the log to a fresh greeting. Does not cancel an in-flight
    /// request.
    pub async fn clear(&self) -> Result<(), RuntimeGone> {
        self.command_tx
            .send(Command::Clear)
            .await
            .map_err(|_| RuntimeGone)
    }

    /// Snapshot of the current state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }
}
