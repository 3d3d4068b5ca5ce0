//! # railqr
//!
//! Batch QR label generation and scan registry for railway track fittings.
//!
//! A batch request names a part type, a serial range and the production
//! metadata. Every serial gets a deterministic code such as `RC-202509-004`
//! and a canonical lookup URL; the code is registered, a printable label
//! document carrying the URL as a QR symbol is rendered, and all documents of
//! the batch are returned as one ZIP archive. Scanning a label resolves the URL
//! back to the registered record.
//!
//! ## Running the service
//!
//! ```rust,no_run
//! use railqr::{Config, server::builder::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/railqr.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Deriving codes
//!
//! ```rust
//! use chrono::NaiveDate;
//! use railqr::core::codes::derive_code;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
//! assert_eq!(derive_code("Rail Clip", date, 1), "RC-202509-001");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{BatchGenerateRequest, BatchProcessor, BatchSummary, PackagedBatch};
pub use core::codes::{DerivedCode, derive_code, derive_prefix, derive_url};
pub use core::registry::{CodeRecord, CodeRegistry, RegistryWrite};
pub use core::render::{DocumentRenderer, PdfRenderer};
pub use core::scan::{ScanOutcome, ScanResolver};
pub use utils::error::{RegistryError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information recorded by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
