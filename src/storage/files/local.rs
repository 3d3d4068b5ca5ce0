//! Local file system storage implementation

use crate::utils::error::{RegistryError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Uploads directory holding per-request scratch space
///
/// ```text
/// {root}/{batch_id}/{code}.pdf    rendered documents
/// {root}/{batch_id}.zip           archive of one batch
/// ```
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage instance
    pub async fn new(base_path: &str) -> Result<Self> {
        let path = PathBuf::from(base_path);

        // Create directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                RegistryError::FileStorage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        info!("Local file storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Root of the uploads directory
    pub fn root(&self) -> &Path {
        &self.base_path
    }

    /// Directory holding the documents of one batch
    pub fn batch_dir(&self, batch_id: &str) -> PathBuf {
        self.base_path.join(batch_id)
    }

    /// Archive location of one batch
    pub fn archive_path(&self, batch_id: &str) -> PathBuf {
        self.base_path.join(format!("{}.zip", batch_id))
    }

    /// Create the document directory of a batch
    pub async fn create_batch_dir(&self, batch_id: &str) -> Result<PathBuf> {
        let dir = self.batch_dir(batch_id);
        fs::create_dir_all(&dir).await.map_err(|e| {
            RegistryError::FileStorage(format!(
                "Failed to create batch directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!("Created batch directory: {}", dir.display());
        Ok(dir)
    }

    /// Create a uniquely named scratch directory for a one-off document
    pub async fn create_scratch_dir(&self) -> Result<PathBuf> {
        self.create_batch_dir(&format!("single-{}", Uuid::new_v4()))
            .await
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        // Check if base directory is accessible
        if !self.base_path.exists() {
            return Err(RegistryError::FileStorage(
                "Storage directory does not exist".to_string(),
            ));
        }

        // Try to write a test file
        let test_file = self.base_path.join(".health_check");
        fs::write(&test_file, b"health_check")
            .await
            .map_err(|e| RegistryError::FileStorage(format!("Storage not writable: {}", e)))?;

        // Clean up test file
        let _ = fs::remove_file(&test_file).await;

        Ok(())
    }

    /// Detect content type of a transient file
    pub fn detect_content_type(filename: &str) -> &'static str {
        match Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("pdf") => "application/pdf",
            Some("zip") => "application/zip",
            _ => "application/octet-stream",
        }
    }
}
