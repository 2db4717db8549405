//! Poster trait definition.
//!
//! This module defines the single-operation transport interface the indexer
//! sends its requests through.

use async_trait::async_trait;

use crate::errors::TransportError;

/// Result of a completed POST round-trip.
///
/// Any status code, including error statuses, is a completed round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostResponse {
    /// Numeric HTTP status code.
    pub status_code: u16,
    /// Status line text, e.g. `"201 Created"`.
    pub status: String,
    /// Raw response body. Not interpreted by the indexer.
    pub body: Vec<u8>,
}

impl PostResponse {
    pub fn new(status_code: u16, status: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status_code,
            status: status.into(),
            body,
        }
    }

    /// Check if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Abstract interface for posting a JSON body to a URL.
///
/// Implementations can be swapped for different HTTP stacks or test doubles.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Concurrent calls on a shared
/// `Indexer` are only as safe as the poster behind it.
///
/// # Error Handling
///
/// `post` fails only when the request could not be completed. Callers get
/// the returned `TransportError` back unchanged from `Indexer::index`.
#[async_trait]
pub trait Poster: Send + Sync {
    /// Post `body` to `url` with a JSON content type.
    ///
    /// # Returns
    ///
    /// * `Ok(PostResponse)` - The request completed, whatever its status
    /// * `Err(TransportError)` - The request could not be completed
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<PostResponse, TransportError>;
}
