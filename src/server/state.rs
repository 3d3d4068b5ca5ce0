//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::batch::BatchProcessor;
use crate::core::registry::CodeRegistry;
use crate::core::render::DocumentRenderer;
use crate::core::scan::ScanResolver;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Configuration is passed into the batch processor at construction; handlers
/// never read process-wide settings.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Batch pipeline
    pub batches: Arc<BatchProcessor>,
    /// Scan and batch lookups
    pub scans: Arc<ScanResolver>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer, renderer: Arc<dyn DocumentRenderer>) -> Self {
        let registry: Arc<dyn CodeRegistry> = storage.database.clone();
        let batches = BatchProcessor::new(
            registry.clone(),
            renderer,
            storage.files.clone(),
            config.codes().clone(),
        );

        Self {
            config: Arc::new(config),
            storage: Arc::new(storage),
            batches: Arc::new(batches),
            scans: Arc::new(ScanResolver::new(registry)),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
