//! Service-level configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.storage.validate()?;
        self.files.validate()?;
        self.codes.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }
        Ok(())
    }
}

impl Validate for FileStorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.uploads_dir.trim().is_empty() {
            return Err("Uploads directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for CodeConfig {
    fn validate(&self) -> Result<(), String> {
        let base = self.normalized_base_url();
        if base.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_UNITS {
            return Err(format!(
                "Max batch size must be between 1 and {}",
                MAX_BATCH_UNITS
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
