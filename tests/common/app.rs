//! Application harness
//!
//! Builds the real application state over an in-memory registry and a
//! temporary uploads directory.

use actix_web::web;
use async_trait::async_trait;
use railqr::config::{Config, DatabaseConfig};
use railqr::core::render::{DocumentRenderer, PdfRenderer};
use railqr::server::AppState;
use railqr::server::server::create_app;
use railqr::storage::StorageLayer;
use railqr::utils::error::{RegistryError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Renderer that fails for every code
pub struct FailingRenderer;

#[async_trait]
impl DocumentRenderer for FailingRenderer {
    async fn render(&self, code: &str, _url: &str, _dir: &Path) -> Result<PathBuf> {
        Err(RegistryError::render(format!("cannot render {}", code)))
    }
}

/// Application state plus the temporary directory it writes into
pub struct TestHarness {
    pub uploads: TempDir,
    pub state: AppState,
}

impl TestHarness {
    /// Harness with the PDF renderer
    pub async fn new() -> Self {
        Self::with_renderer(Arc::new(PdfRenderer::default())).await
    }

    /// Harness with a custom renderer
    pub async fn with_renderer(renderer: Arc<dyn DocumentRenderer>) -> Self {
        let uploads = TempDir::new().expect("temp uploads dir");
        let config = test_config(uploads.path());

        let storage = StorageLayer::new(config.storage(), config.files())
            .await
            .expect("storage layer");
        storage.migrate().await.expect("migrations");

        let state = AppState::new(config, storage, renderer);
        Self { uploads, state }
    }

    /// Actix application over a clone of the harness state; borrows nothing from `self`
    pub fn app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<
                impl actix_web::body::MessageBody + use<>,
            >,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        create_app(web::Data::new(self.state.clone()))
    }

    pub fn uploads_dir(&self) -> &Path {
        self.uploads.path()
    }
}

/// Configuration pointing at an in-memory registry and `uploads`
pub fn test_config(uploads: &Path) -> Config {
    let mut config = Config::default();
    config.service.storage.database = DatabaseConfig::in_memory();
    config.service.files.uploads_dir = uploads.to_string_lossy().into_owned();
    config
}
