//! Code derivation configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for code derivation and batch sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeConfig {
    /// Base URL prepended to every canonical lookup path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum number of serial numbers per batch request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u32,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl CodeConfig {
    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
