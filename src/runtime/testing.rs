//! Mock implementations for testing
//!
//! These mocks enable exercising the runtime without real I/O.

use super::traits::ReplyClient;
use crate::gateway::{GatewayError, ReplyOutcome};
use crate::session::Message;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Recorded `generate` invocation.
pub struct RecordedRequest {
    pub text: String,
    pub history: Vec<Message>,
}

/// Mock reply client that returns queued outcomes and records requests.
#[derive(Default)]
pub struct MockReplyClient {
    outcomes: Mutex<VecDeque<Result<ReplyOutcome, GatewayError>>>,
    delay: Mutex<Option<Duration>>,
    /// Record of all requests made
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl MockReplyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply for the next request.
    pub fn queue_reply(&self, text: &str) {
        self.queue_outcome(Ok(ReplyOutcome {
            reply: Some(text.to_string()),
        }));
    }

    pub fn queue_outcome(&self, outcome: Result<ReplyOutcome, GatewayError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Delay applied before each response; used to hold a request in flight.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ReplyClient for MockReplyClient {
    async fn generate(
        &self,
        text: &str,
        history: &[Message],
    ) -> Result<ReplyOutcome, GatewayError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            text: text.to_string(),
            history: history.to_vec(),
        });

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.outcomes.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(GatewayError::Transport("no mock outcome queued".to_string()))
        })
    }
}
