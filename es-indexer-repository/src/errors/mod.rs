//! Error types for the indexer repository.

mod indexer_error;
mod transport_error;

pub use indexer_error::IndexerError;
pub use transport_error::TransportError;
