//! # ES Indexer
//!
//! Wiring for the `es-indexer` command: builds an `Indexer` from the
//! environment and loads documents from disk.

pub mod config;

pub use config::Dependencies;

use std::fs;
use std::path::Path;

use es_indexer_repository::IndexerError;
use es_indexer_shared::Document;
use thiserror::Error;

/// Errors that can occur while wiring or running the indexer command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Indexing error.
    #[error("Indexer error: {0}")]
    IndexerError(#[from] IndexerError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document file is not a valid document.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Parse a document from its JSON form.
pub fn parse_document(json: &str) -> Result<Document, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON document from `path`.
pub fn read_document(path: &Path) -> Result<Document, AppError> {
    let contents = fs::read_to_string(path)?;
    parse_document(&contents)
}
