//! # ES Indexer Shared
//!
//! Types shared between the indexer client and its callers: the document
//! payload that gets sent to the search engine and the normalized response
//! returned after indexing.

mod document;
mod response;

pub use document::{Document, Timestamp};
pub use response::IndexResponse;
