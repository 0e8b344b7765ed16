//! Client error types.

use thiserror::Error;

/// Uniform error for every gateway call.
///
/// The display form is always a human-readable message suitable for a
/// notification: the `message` field from the response body when the
/// backend sent one, otherwise the calling operation's fixed fallback.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport layer failed before any response arrived, or the
    /// response body could not be decoded.
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    AuthenticationFailed(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx status.
    #[error("{message}")]
    ServerError { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Classifies a non-2xx response. The message is taken from the body's
    /// JSON `message` field when present, else from `fallback`.
    pub(crate) fn from_response(status: reqwest::StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback.to_string());
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// True when the backend rejected the session's credentials and the
    /// operator should be sent back through login.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Forbidden(_))
    }
}
