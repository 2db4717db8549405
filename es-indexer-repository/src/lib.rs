//! # ES Indexer Repository
//!
//! This crate provides the indexer client used to put documents into a
//! remote search engine. It includes the error types, the transport
//! interface the indexer posts through, and a concrete HTTP transport.

pub mod config;
pub mod errors;
pub mod http;
pub mod indexer;
pub mod interfaces;

pub use config::IndexerConfig;
pub use errors::{IndexerError, TransportError};
pub use http::HttpPoster;
pub use indexer::{created_from_status, Indexer, CREATED_STATUS};
pub use interfaces::{PostResponse, Poster};
