//! Binary-level runtime configuration.
//!
//! Environment variables provide the base configuration; CLI flags override
//! the bind address.

use feed::FeedConfig;
use server::ServerConfig;

/// Full runtime configuration for the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub feed: FeedConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            feed: FeedConfig::from_env(),
        }
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_env_values() {
        let config = AppConfig {
            server: ServerConfig::default(),
            feed: FeedConfig::default(),
        }
        .with_overrides(Some("127.0.0.1".into()), Some(9000));

        assert_eq!(config.server.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = AppConfig {
            server: ServerConfig::default(),
            feed: FeedConfig::default(),
        }
        .with_overrides(None, None);

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.feed.timeout_ms, 3000);
    }
}
