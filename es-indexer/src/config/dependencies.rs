//! Dependency initialization and wiring for the indexer command.

use std::sync::Arc;
use tracing::info;

use crate::AppError;
use es_indexer_repository::{HttpPoster, Indexer, IndexerConfig, Poster};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured indexer ready to use.
    pub indexer: Indexer,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See `IndexerConfig::from_env` for the variables that are read.
    /// `host` and `port`, when given, override the environment.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the environment is invalid or the HTTP client fails to build
    pub fn new(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let mut config = IndexerConfig::from_env().map_err(AppError::config)?;
        if let Some(host) = host {
            config = config.with_host(host);
        }
        if let Some(port) = port {
            config = config.with_port(port);
        }

        let poster = HttpPoster::from_config(&config)
            .map_err(|e| AppError::config(format!("Failed to create HTTP poster: {}", e)))?;

        Ok(Self::with_poster(&config, Arc::new(poster)))
    }

    /// Wire dependencies around an already-built poster.
    pub fn with_poster(config: &IndexerConfig, poster: Arc<dyn Poster>) -> Self {
        info!(
            host = %config.host,
            port = %config.port,
            "Initializing dependencies"
        );

        let indexer = Indexer::from_config(config, poster);

        Self { indexer }
    }
}
