//! Indexer error types.
//!
//! This module defines the errors returned by `Indexer::index`.

use thiserror::Error;

use super::TransportError;

/// Errors that can occur while indexing a document.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The payload could not be serialized to JSON. Nothing was sent.
    #[error("Serialization error: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// The transport failed to complete the request.
    ///
    /// Holds the transport's error exactly as it was produced.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl IndexerError {
    /// The transport error, if this error came from the transport.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            Self::SerializationError(_) => None,
        }
    }

    /// Whether this error was raised before any request was sent.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::SerializationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_is_transparent() {
        let inner = TransportError::connection("connection refused");
        let err = IndexerError::from(inner.clone());

        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.transport_error(), Some(&inner));
        assert!(!err.is_serialization());
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = IndexerError::SerializationError(json_err);

        assert!(err.is_serialization());
        assert!(err.transport_error().is_none());
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
