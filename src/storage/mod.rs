//! Storage layer for the registry service
//!
//! The registry store holds one record per generated code; the uploads directory
//! holds transient documents and archives.

/// Database storage module
pub mod database;
/// File storage module
pub mod files;

use crate::config::{FileStorageConfig, StorageConfig};
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer holding the registry store and the uploads directory
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Registry database
    pub database: Arc<database::Database>,
    /// Uploads directory
    pub files: Arc<files::LocalStorage>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig, files_config: &FileStorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        debug!("Initializing file storage");
        let files = Arc::new(files::LocalStorage::new(&files_config.uploads_dir).await?);

        info!("Storage layer initialized successfully");
        Ok(Self { database, files })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> StorageHealthStatus {
        let mut status = StorageHealthStatus::default();

        match self.database.health_check().await {
            Ok(_) => status.database = true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
            }
        }

        match self.files.health_check().await {
            Ok(_) => status.files = true,
            Err(e) => {
                warn!("File storage health check failed: {}", e);
            }
        }

        status.overall = status.database && status.files;
        status
    }
}

/// Storage health status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageHealthStatus {
    /// Database health
    pub database: bool,
    /// File storage health
    pub files: bool,
    /// Overall health
    pub overall: bool,
}
