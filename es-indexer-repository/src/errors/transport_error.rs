//! Transport error types.
//!
//! This module defines the errors a `Poster` reports when a request could not
//! be completed at all. A response with a non-success status is not a
//! transport error.

use thiserror::Error;

/// Errors that can occur while posting a request to the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Failed to establish a connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the configured timeout.
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// The request could not be built, sent or read.
    #[error("Request error: {0}")]
    RequestError(String),
}

impl TransportError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::TimeoutError(msg.into())
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_value() {
        assert_eq!(
            TransportError::connection("refused"),
            TransportError::ConnectionError("refused".to_string())
        );
        assert_ne!(
            TransportError::connection("refused"),
            TransportError::request("refused")
        );
    }

    #[test]
    fn test_display() {
        let err = TransportError::timeout("after 5s");
        assert_eq!(err.to_string(), "Timeout error: after 5s");
    }
}
