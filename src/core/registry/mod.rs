//! Code registry seam
//!
//! One [`CodeRecord`] is persisted per generated code. Writes report a typed
//! [`RegistryWrite`] so callers never inspect store-specific error codes.

use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Persisted registry record for one code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRecord {
    /// Internal identifier
    pub id: String,
    /// Human-readable code, e.g. `RC-202509-004`
    pub code: String,
    pub part_type: String,
    pub manufacture_date: NaiveDate,
    pub lot_no: String,
    pub serial_no: u32,
    pub manufacturer_name: String,
    pub warranty_years: u32,
    pub expiry_date: NaiveDate,
    /// Canonical lookup URL encoded in the QR symbol
    pub url: String,
    /// Shared by all records of one batch request
    pub batch_id: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a single registry write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWrite {
    Written,
    /// The code or internal identifier already exists
    DuplicateKey,
    Failed(String),
}

impl RegistryWrite {
    pub fn is_written(&self) -> bool {
        matches!(self, RegistryWrite::Written)
    }
}

/// Registry store operations used by the batch and scan paths
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeRegistry: Send + Sync {
    /// Insert a record, classifying duplicate keys separately from other failures
    async fn write(&self, record: &CodeRecord) -> RegistryWrite;

    /// Find a record whose code or internal identifier equals `key`
    async fn find_by_code_or_id(&self, key: &str) -> Result<Option<CodeRecord>>;

    /// All records of one batch, ordered by serial number
    async fn list_by_batch(&self, batch_id: &str) -> Result<Vec<CodeRecord>>;
}
