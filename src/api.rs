//! HTTP API for Ember Chat
//!
//! The presentation-facing surface: a read-only snapshot of the session
//! plus the send/clear/connectivity commands. Handlers never mutate state
//! directly; everything goes through the session handle.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::connectivity::ConnectivityMonitor;
use crate::runtime::SessionHandle;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session: SessionHandle,
    pub connectivity: Arc<ConnectivityMonitor>,
}

impl AppState {
    pub fn new(session: SessionHandle, connectivity: Arc<ConnectivityMonitor>) -> Self {
        Self {
            session,
            connectivity,
        }
    }
}
