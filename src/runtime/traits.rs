//! Trait abstraction for the reply client
//!
//! Enables running the session against a mock gateway in tests.

use crate::gateway::{GatewayClient, GatewayError, ReplyOutcome};
use crate::session::Message;
use async_trait::async_trait;
use std::sync::Arc;

/// Client performing a single request/response exchange per call. No retry:
/// each accepted send maps to exactly one invocation.
#[async_trait]
pub trait ReplyClient: Send + Sync {
    async fn generate(
        &self,
        text: &str,
        history: &[Message],
    ) -> Result<ReplyOutcome, GatewayError>;
}

#[async_trait]
impl ReplyClient for GatewayClient {
    async fn generate(
        &self,
        text: &str,
        history: &[Message],
    ) -> Result<ReplyOutcome, GatewayError> {
        GatewayClient::generate(self, text, history).await
    }
}

#[async_trait]
impl<T: ReplyClient + ?Sized> ReplyClient for Arc<T> {
    async fn generate(
        &self,
        text: &str,
        history: &[Message],
    ) -> Result<ReplyOutcome, GatewayError> {
        (**self).generate(text, history).await
    }
}
