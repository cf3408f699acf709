//! # Suggestion Client Configuration
//!
//! Endpoint, credentials and timeout for the suggestion service.

use crate::domain::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Suggestion client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Suggestion endpoint URL.
    pub endpoint: String,

    /// API token sent as `Authorization: Token <api_token>`.
    pub api_token: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SuggestConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TP_DADATA_ENDPOINT`: Suggestion endpoint (default: public DaData address endpoint)
    /// - `TP_DADATA_TOKEN`: API token (default: empty)
    /// - `TP_DADATA_TIMEOUT_MS`: Request timeout (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            endpoint: env::var("TP_DADATA_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.endpoint),

            api_token: env::var("TP_DADATA_TOKEN").unwrap_or(defaults.api_token),

            timeout_ms: env::var("TP_DADATA_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }

    /// Create a config pointing at a local stub server.
    pub fn for_testing(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: "test-token".to_string(),
            timeout_ms: 2_000,
        }
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// True when a token is configured.
    pub fn has_token(&self) -> bool {
        !self.api_token.trim().is_empty()
    }
}
