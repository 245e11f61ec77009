//! Feed configuration: API key, endpoint, and request timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Static configuration for the external price feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// API key; the provider's "demo" key serves canned data.
    pub api_key: String,
    /// Quote endpoint base URL.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: "demo".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FeedConfig {
    /// Build configuration from environment variables, with defaults:
    /// `SEMITRACE_API_KEY`, `SEMITRACE_FEED_URL`, `SEMITRACE_FEED_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("SEMITRACE_API_KEY").unwrap_or(defaults.api_key);
        let base_url = std::env::var("SEMITRACE_FEED_URL").unwrap_or(defaults.base_url);
        let timeout_ms = std::env::var("SEMITRACE_FEED_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.timeout_ms);

        Self {
            api_key,
            base_url,
            timeout_ms,
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.api_key, "demo");
        assert_eq!(config.timeout_ms, 3000);
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert!(config.base_url.starts_with("https://"));
    }
}
