//! API Errors
//!
//! Failure taxonomy for calls against the REST backend.

use serde::Deserialize;

/// Error returned by every backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response carrying the server's message
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 401 from an authenticated endpoint
    #[error("Session expired")]
    Unauthorized,

    /// 2xx body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Rejected before any request was sent
    #[error("{0}")]
    Invalid(String),
}

/// `{ "message": "..." }` body of a failed response
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

impl ApiError {
    /// Text surfaced to the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Classify a finished response by status code and raw body.
    ///
    /// `fallback` is used when a non-2xx body carries no usable message.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Option<Self> {
        if (200..300).contains(&status) {
            return None;
        }
        if status == 401 {
            return Some(Self::Unauthorized);
        }
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Some(Self::Status { status, message })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
