//! Main service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Uploads directory configuration
    #[serde(default)]
    pub files: FileStorageConfig,
    /// Code derivation configuration
    #[serde(default)]
    pub codes: CodeConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Build a configuration from defaults overridden by environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override individual settings from environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Ok(dir) = env::var("UPLOADS_DIR") {
            self.files.uploads_dir = dir;
        }
        if let Ok(base_url) = env::var("BASE_URL") {
            self.codes.base_url = base_url;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.logging.format = format,
                Err(e) => warn!("Ignoring LOG_FORMAT: {}", e),
            }
        }
    }
}
