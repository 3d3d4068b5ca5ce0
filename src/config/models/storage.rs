//! Code registry store settings

use super::*;
use serde::{Deserialize, Serialize};

/// Where registered codes are kept
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Connection settings for the registry database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `sqlite://path?mode=rwc`, `sqlite::memory:` or, with the `postgres` feature, `postgres://`
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Pool ceiling; concurrent batch requests share it
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait when acquiring a pooled connection
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite database, used by tests and dry runs
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            // in-memory SQLite is per connection
            max_connections: 1,
            connection_timeout: default_connection_timeout(),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}
