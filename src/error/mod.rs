//! Error types for the assist engine.
//!
//! The two text operations on the backend absorb every variant here into a
//! fixed fallback sentence before it reaches a user-facing flow; only the
//! image-edit operation lets these escape to its caller.

use thiserror::Error;

/// Primary error type for all backend operations.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("No image part in response")]
    NoImage,
}

impl AssistError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AssistError>;
