//! Scan resolution
//!
//! A scanned label URL ends in `/{prefix}/{yyyymm}-{serial}`. The two segments
//! are reassembled into a code and looked up in the registry.

use crate::core::registry::{CodeRecord, CodeRegistry};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of resolving a scanned code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(CodeRecord),
    /// No record matched; carries the code that was tried
    NotFound { code: String },
}

/// Code reconstructed from the path segments of a canonical URL
pub fn expected_code(prefix: &str, year_month_code: &str) -> String {
    format!("{}-{}", prefix.to_uppercase(), year_month_code)
}

/// Resolves scanned URLs and batch listings against the registry
#[derive(Clone)]
pub struct ScanResolver {
    registry: Arc<dyn CodeRegistry>,
}

impl ScanResolver {
    pub fn new(registry: Arc<dyn CodeRegistry>) -> Self {
        Self { registry }
    }

    /// Look up the record for a scanned `(prefix, yearMonthCode)` pair.
    ///
    /// The code is matched against both the code and the internal identifier.
    pub async fn resolve(&self, prefix: &str, year_month_code: &str) -> Result<ScanOutcome> {
        let code = expected_code(prefix, year_month_code);
        debug!(code = %code, "Resolving scanned code");

        match self.registry.find_by_code_or_id(&code).await? {
            Some(record) => {
                info!(code = %code, batch_id = %record.batch_id, "Scan matched");
                Ok(ScanOutcome::Found(record))
            }
            None => {
                info!(code = %code, "Scan did not match any record");
                Ok(ScanOutcome::NotFound { code })
            }
        }
    }

    /// All records of a batch
    pub async fn batch_records(&self, batch_id: &str) -> Result<Vec<CodeRecord>> {
        self.registry.list_by_batch(batch_id).await
    }
}
