//! Error types for webhook delivery.

use thiserror::Error;

/// Errors that can occur when delivering a notification.
#[derive(Debug, Error)]
pub enum DeliverError {
    /// The message could not be serialized into the webhook payload
    #[error("failed to encode webhook payload: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// The request never produced a response (connect, DNS, TLS, timeout)
    #[error("failed to send webhook request: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The webhook answered with something other than 200 OK
    #[error("webhook returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl DeliverError {
    /// HTTP status returned by the webhook, if it answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::EncodeError(_) | Self::TransportError(_) => None,
        }
    }
}
