//! File storage configuration

use super::default_uploads_dir;
use serde::{Deserialize, Serialize};

/// Uploads directory holding transient documents and archives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStorageConfig {
    /// Local uploads path
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
        }
    }
}
