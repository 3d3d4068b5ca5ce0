//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod codes;
pub mod file_storage;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use codes::*;
pub use file_storage::*;
pub use logging::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB, batch requests are small JSON documents
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Default canonical lookup base URL, matching the scan route of a default deployment
pub fn default_base_url() -> String {
    "http://localhost:8000/api/qr".to_string()
}

/// Hard upper bound on units per batch request
pub const MAX_BATCH_UNITS: u32 = 1000;

pub fn default_max_batch_size() -> u32 {
    MAX_BATCH_UNITS
}

pub fn default_uploads_dir() -> String {
    "./uploads".to_string()
}

pub fn default_database_url() -> String {
    "sqlite://data/railqr.db?mode=rwc".to_string()
}
