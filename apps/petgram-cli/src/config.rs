//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use petgram_core::{AuthConfig, FeedConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the posts API.
    pub api_base_url: String,
    /// Simulated latency for login/signup round trips.
    pub submit_latency: Duration,
    /// Whether gateway failures fall back to the sample dataset.
    pub fallback_on_error: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("PETGRAM_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            submit_latency: Duration::from_millis(
                env::var("PETGRAM_SUBMIT_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            ),
            fallback_on_error: env::var("PETGRAM_FEED_FALLBACK")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            submit_latency: self.submit_latency,
        }
    }

    pub fn feed(&self) -> FeedConfig {
        FeedConfig {
            fallback_on_error: self.fallback_on_error,
            ..FeedConfig::default()
        }
    }
}
