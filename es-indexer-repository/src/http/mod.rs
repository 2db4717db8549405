//! HTTP implementation of the indexer transport.
//!
//! This module provides a concrete implementation of `Poster` backed by
//! reqwest.

mod poster;

pub use poster::HttpPoster;
