//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{RegistryError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RegistryError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting railqr registry service");

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        address = %config.server().address(),
        base_url = %config.codes().normalized_base_url(),
        uploads_dir = %config.files().uploads_dir,
        "Server configured"
    );
    info!("   GET  /health - Health check");
    info!("   POST /api/qr/batch-generate - Batch label archive");
    info!("   POST /api/qr/generate-pdf - Single label document");
    info!("   GET  /api/qr/batch/{{batchId}} - Batch records");
    info!("   GET  /api/qr/{{prefix}}/{{yearMonthCode}} - Scan lookup");

    server.start().await
}
