//! HTTP client for the chat endpoint

use super::error::GatewayError;
use super::types::{GenerateRequest, GenerateResponse, HistoryEntry, ReplyOutcome};
use crate::config::Config;
use crate::session::Message;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

/// Client performing one POST per call against the configured endpoint.
///
/// The core enforces no overall deadline; only the connect phase is bounded
/// so that an unreachable host fails instead of hanging in the dial.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
    platform: String,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            platform: config.platform.clone(),
        }
    }

    /// One request/response exchange. Success means a response with a 2xx
    /// status was obtained and read, even if it carried no usable reply.
    pub async fn generate(
        &self,
        text: &str,
        history: &[Message],
    ) -> Result<ReplyOutcome, GatewayError> {
        let request = GenerateRequest {
            message: text,
            history: history.iter().map(HistoryEntry::from_message).collect(),
            timestamp: Utc::now(),
            platform: &self.platform,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Transport(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    GatewayError::Transport(format!("connection failed: {e}"))
                } else {
                    GatewayError::Transport(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::from_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("failed to read response: {e}")))?;

        // A success body that is not the expected shape is degraded
        // success, not a failure.
        let reply = match serde_json::from_str::<GenerateResponse>(&body) {
            Ok(decoded) => decoded.into_reply(),
            Err(e) => {
                tracing::warn!(error = %e, "Response body was not the expected shape");
                None
            }
        };

        Ok(ReplyOutcome { reply })
    }
}
