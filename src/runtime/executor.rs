//! Session runtime executor

use super::traits::ReplyClient;
use super::{Command, SessionHandle, SharedState};
use crate::config::Config;
use crate::connectivity::ConnectivityMonitor;
use crate::session::{transition, Effect, Event, SessionContext, SessionState};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Event-loop executor for the single conversation session.
///
/// Owns the authoritative state; the shared copy is refreshed after every
/// transition so readers never observe a half-applied event.
pub struct SessionRuntime<C: ReplyClient + 'static> {
    context: SessionContext,
    state: SessionState,
    shared: SharedState,
    client: Arc<C>,
    connectivity: Arc<ConnectivityMonitor>,
    command_rx: mpsc::Receiver<Command>,
    command_tx: mpsc::Sender<Command>,
}

impl<C: ReplyClient + 'static> SessionRuntime<C> {
    pub fn new(
        client: C,
        connectivity: Arc<ConnectivityMonitor>,
        config: &Config,
    ) -> (Self, SessionHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let state = SessionState::new(&config.greeting);
        let shared: SharedState = Arc::new(RwLock::new(state.clone()));

        let runtime = Self {
            context: SessionContext {
                online: connectivity.is_online(),
                history_window: config.history_window,
                greeting: config.greeting.clone(),
            },
            state,
            shared: Arc::clone(&shared),
            client: Arc::new(client),
            connectivity,
            command_rx,
            command_tx: command_tx.clone(),
        };

        let handle = SessionHandle {
            command_tx,
            state: shared,
        };
        (runtime, handle)
    }

    pub async fn run(mut self) {
        tracing::info!("Starting session runtime");
        while let Some(command) = self.command_rx.recv().await {
            self.process(command).await;
        }
        tracing::info!("Session runtime stopped");
    }

    async fn process(&mut self, command: Command) {
        let (event, ack) = match command {
            Command::Send { text, ack } => (Event::UserMessage { text }, Some(ack)),
            Command::Clear => (Event::Clear, None),
            Command::Resolved { outcome } => (Event::ReplyResolved { outcome }, None),
        };

        // Mirror the connectivity gate at processing time; the offline
        // error variant depends on it as well.
        self.context.online = self.connectivity.is_online();

        let result = transition(&self.state, &self.context, event);
        if let Some(reason) = result.rejected {
            tracing::debug!(?reason, "Send ignored");
        }

        self.state = result.new_state;
        *self.shared.write().await = self.state.clone();

        if let Some(ack) = ack {
            // The caller may have given up waiting.
            let _ = ack.send(result.rejected);
        }

        for effect in result.effects {
            self.execute(effect);
        }
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::RequestReply { text, history } => {
                // Spawn the exchange as a background task so the loop stays
                // responsive; the single-flight guarantee comes from the
                // pending flag, not from blocking here.
                let client = Arc::clone(&self.client);
                let command_tx = self.command_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.generate(&text, &history).await;
                    if let Err(e) = &outcome {
                        tracing::warn!(error = %e, "Generation request failed");
                    }
                    // If the runtime is gone the resolution is dropped.
                    let _ = command_tx.send(Command::Resolved { outcome }).await;
                });
            }
        }
    }
}
