//! Indexer client implementation.
//!
//! This module provides the client that puts a single document into the
//! search engine and normalizes the outcome into an `IndexResponse`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::config::IndexerConfig;
use crate::errors::IndexerError;
use crate::interfaces::Poster;
use es_indexer_shared::IndexResponse;

/// Status code the search engine answers with when a document is new.
pub const CREATED_STATUS: u16 = 201;

/// Map a response status to the `created` flag of an `IndexResponse`.
///
/// Only `201 Created` counts as a creation. Every other status, including
/// other 2xx codes, means the document was not newly created.
pub fn created_from_status(status_code: u16) -> bool {
    status_code == CREATED_STATUS
}

/// Client that indexes documents into a remote search engine.
///
/// Holds only immutable configuration, so one instance can be shared
/// across tasks. Whether concurrent calls are safe depends on the poster.
///
/// # Example
///
/// ```ignore
/// let poster = HttpPoster::from_config(&IndexerConfig::default())?;
/// let indexer = Indexer::new("127.0.0.1", "9200", Arc::new(poster));
/// let response = indexer.index("trumpet", "doc", "first", true, &document).await?;
/// if response.created {
///     println!("created {}", response.id);
/// }
/// ```
pub struct Indexer {
    host: String,
    port: String,
    poster: Arc<dyn Poster>,
}

impl Indexer {
    /// Create a new Indexer targeting `host:port`.
    ///
    /// Host and port are not validated. A malformed value produces a
    /// malformed URL, which the poster rejects at request time.
    pub fn new(host: impl Into<String>, port: impl Into<String>, poster: Arc<dyn Poster>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            poster,
        }
    }

    /// Create a new Indexer from the connection target in `config`.
    pub fn from_config(config: &IndexerConfig, poster: Arc<dyn Poster>) -> Self {
        Self::new(config.host.clone(), config.port.clone(), poster)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Build the URL of a document.
    ///
    /// Segments are interpolated as given: no escaping, no trailing slash,
    /// no query string.
    pub fn doc_url(&self, index_name: &str, type_name: &str, document_id: &str) -> String {
        format!(
            "http://{}:{}/{}/{}/{}",
            self.host, self.port, index_name, type_name, document_id
        )
    }

    /// Index a document under `index_name/type_name/document_id`.
    ///
    /// `force_create` is accepted and recorded on the span but does not
    /// change the request that is sent.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexResponse)` - The round-trip completed; `created` is true
    ///   only for a `201 Created` answer
    /// * `Err(IndexerError::SerializationError)` - The payload could not be
    ///   serialized; nothing was sent
    /// * `Err(IndexerError::Transport)` - The poster failed; carries the
    ///   poster's error unchanged
    #[instrument(
        skip_all,
        fields(
            index = %index_name,
            doc_type = %type_name,
            id = %document_id,
            force_create = force_create
        )
    )]
    pub async fn index<D>(
        &self,
        index_name: &str,
        type_name: &str,
        document_id: &str,
        force_create: bool,
        document: &D,
    ) -> Result<IndexResponse, IndexerError>
    where
        D: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(document).map_err(|e| {
            error!(error = %e, "Failed to serialize document");
            IndexerError::SerializationError(e)
        })?;

        let url = self.doc_url(index_name, type_name, document_id);
        debug!(url = %url, body_len = body.len(), "Posting document");

        let response = self.poster.post(&url, body).await.map_err(|e| {
            error!(url = %url, error = %e, "Transport failed to post document");
            IndexerError::Transport(e)
        })?;

        let created = created_from_status(response.status_code);
        debug!(status = %response.status, created, "Document indexed");

        Ok(IndexResponse::new(document_id, index_name, type_name, created))
    }
}
