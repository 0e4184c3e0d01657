//! Configuration: API key and endpoint resolution.

use std::time::Duration;

use crate::error::{AssistError, Result};

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Gemini backend.
///
/// Constructed explicitly and handed to [`GeminiClient`](crate::provider::GeminiClient)
/// rather than living in ambient global state, so a test harness can scope
/// its own instance with a mock base URL.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

impl AssistConfig {
    /// Create a config with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Resolve the API key from the environment (`GEMINI_API_KEY`),
    /// loading a `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AssistError::Authentication("Missing GEMINI_API_KEY".into()))?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL. Tests point this at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
