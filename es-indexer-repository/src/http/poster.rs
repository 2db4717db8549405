//! reqwest-backed poster.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::IndexerConfig;
use crate::errors::TransportError;
use crate::interfaces::{PostResponse, Poster};

/// Poster that sends requests over HTTP.
///
/// Timeouts are configured here, not on the `Indexer`.
///
/// # Example
///
/// ```ignore
/// let config = IndexerConfig::default().with_request_timeout(Duration::from_secs(5));
/// let poster = HttpPoster::from_config(&config)?;
/// let indexer = Indexer::from_config(&config, Arc::new(poster));
/// ```
#[derive(Debug, Clone)]
pub struct HttpPoster {
    client: Client,
}

impl HttpPoster {
    /// Create a poster honoring the transport settings of `config`.
    ///
    /// System proxy settings are ignored; requests go straight to the
    /// search engine.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpPoster)` - A new poster
    /// * `Err(TransportError)` - If the HTTP client could not be built
    pub fn from_config(config: &IndexerConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().no_proxy();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::request(e.to_string()))?;

        info!(
            timeout_ms = config.request_timeout.map(|t| t.as_millis() as u64),
            "Created HTTP poster"
        );

        Ok(Self { client })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::connection(err.to_string())
        } else {
            TransportError::request(err.to_string())
        }
    }
}

#[async_trait]
impl Poster for HttpPoster {
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<PostResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!(url = %url, status = %status, body_len = body.len(), "Received response");

        Ok(PostResponse::new(status.as_u16(), status.to_string(), body))
    }
}
