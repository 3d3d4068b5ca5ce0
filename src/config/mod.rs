//! Configuration management for the service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RegistryError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RegistryError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| RegistryError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a file if it exists, otherwise from the environment.
    /// Environment variables override file values.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            dotenvy::dotenv().ok();
            let mut config = Self::from_file(path).await?;
            config.service.apply_env_overrides();
            config.validate()?;
            Ok(config)
        } else {
            warn!(
                "Config file {:?} not found, using defaults and environment",
                path
            );
            Self::from_env()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        dotenvy::dotenv().ok();

        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get uploads configuration
    pub fn files(&self) -> &FileStorageConfig {
        &self.service.files
    }

    /// Get code derivation configuration
    pub fn codes(&self) -> &CodeConfig {
        &self.service.codes
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| RegistryError::Config(format!("Server config error: {}", e)))?;

        self.service
            .storage
            .validate()
            .map_err(|e| RegistryError::Config(format!("Storage config error: {}", e)))?;

        self.service
            .files
            .validate()
            .map_err(|e| RegistryError::Config(format!("Files config error: {}", e)))?;

        self.service
            .codes
            .validate()
            .map_err(|e| RegistryError::Config(format!("Codes config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| RegistryError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
