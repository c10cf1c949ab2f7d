//! Startup and shutdown of the store handle.

use super::NumberService;
use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use std::sync::Arc;

impl NumberService {
    /// Connect to the store named in `config` and build the service
    ///
    /// This is the only place a store connection is created; handlers receive the
    /// service through shared state.
    pub async fn new(config: Config) -> Result<Self> {
        tracing::info!("Connecting to number store");
        let db = Database::new(&config.database_url).await?;
        tracing::info!("Number store ready");

        Ok(Self::with_database(db, config))
    }

    /// Build the service around an already-open database
    pub fn with_database(db: Database, config: Config) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }

    /// Configuration the service was built with
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Release the store connection
    ///
    /// Waits for in-flight queries to return their connections. Call after the HTTP
    /// server has stopped accepting requests.
    pub async fn shutdown(&self) {
        tracing::info!("Closing number store");
        self.db.pool().close().await;
        tracing::info!("Number store closed");
    }
}
