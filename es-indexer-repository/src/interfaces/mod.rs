//! Interface definitions for the indexer transport.
//!
//! This module defines the abstract `Poster` trait that allows the HTTP
//! layer to be swapped, e.g. for a recording stub in tests.

mod poster;

pub use poster::{PostResponse, Poster};
