//! Configuration and dependency wiring for the indexer command.

mod dependencies;

pub use dependencies::Dependencies;
