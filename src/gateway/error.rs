//! Gateway error types

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request attempt, classified for display.
///
/// A response that arrives with a success status but an unexpected body is
/// not an error; the client reports it as a degraded success instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request could not be sent or the connection failed before a
    /// response was obtained.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint was reachable but answered outside the success range.
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },
}

impl GatewayError {
    pub fn from_status(status: StatusCode) -> Self {
        GatewayError::Http {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}
