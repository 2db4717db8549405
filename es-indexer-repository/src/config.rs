//! Configuration types for the Indexer and its HTTP transport.

use std::env;
use std::time::Duration;

/// Default search engine host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default search engine port.
pub const DEFAULT_PORT: &str = "9200";

/// Connection target and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Host of the search engine. Not validated.
    pub host: String,
    /// Port of the search engine, as text. Not validated.
    pub port: String,
    /// Timeout applied by the HTTP transport to each request.
    /// Set to None to wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            request_timeout: None,
        }
    }
}

impl IndexerConfig {
    /// Build a config from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_HOST`: search engine host (default: 127.0.0.1)
    /// - `ELASTICSEARCH_PORT`: search engine port (default: 9200)
    /// - `ELASTICSEARCH_TIMEOUT_MS`: request timeout in milliseconds (optional)
    ///
    /// # Returns
    ///
    /// * `Ok(IndexerConfig)` - The resolved config
    /// * `Err(String)` - If the timeout is set but is not a number
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("ELASTICSEARCH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("ELASTICSEARCH_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let request_timeout = match env::var("ELASTICSEARCH_TIMEOUT_MS") {
            Ok(raw) => Some(parse_timeout_ms(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            request_timeout,
        })
    }

    /// Set the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the per-request timeout of the HTTP transport.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration, String> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| format!("Invalid ELASTICSEARCH_TIMEOUT_MS '{}': {}", raw, e))
}
