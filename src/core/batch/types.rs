//! Batch generation types and data structures

use crate::core::codes::DerivedCode;
use crate::core::registry::{CodeRecord, RegistryWrite};
use crate::storage::files::ScratchFiles;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use uuid::Uuid;

/// Body of `POST /api/qr/batch-generate`
///
/// Every field is optional at the wire level so that missing fields are
/// reported together by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerateRequest {
    pub part_type: Option<String>,
    pub start_id: Option<i64>,
    pub end_id: Option<i64>,
    pub manufacture_date: Option<String>,
    pub lot_no: Option<String>,
    pub manufacturer_name: Option<String>,
    pub warranty_years: Option<i64>,
    pub expiry_date: Option<String>,
}

/// Body of `POST /api/qr/generate-pdf`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleDocumentRequest {
    pub part_type: Option<String>,
    pub manufacture_date: Option<String>,
    pub serial_no: Option<i64>,
}

/// A batch request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSpec {
    pub part_type: String,
    pub start: u32,
    pub end: u32,
    pub manufacture_date: NaiveDate,
    pub lot_no: String,
    pub manufacturer_name: String,
    pub warranty_years: u32,
    pub expiry_date: NaiveDate,
}

impl BatchSpec {
    /// Number of serial numbers in the inclusive range
    pub fn units(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn serials(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Registry record for one serial number of this batch
    pub fn record(&self, batch_id: &str, serial_no: u32, derived: &DerivedCode) -> CodeRecord {
        CodeRecord {
            id: Uuid::new_v4().to_string(),
            code: derived.code.clone(),
            part_type: self.part_type.clone(),
            manufacture_date: self.manufacture_date,
            lot_no: self.lot_no.clone(),
            serial_no,
            manufacturer_name: self.manufacturer_name.clone(),
            warranty_years: self.warranty_years,
            expiry_date: self.expiry_date,
            url: derived.url.clone(),
            batch_id: batch_id.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of one serial number
#[derive(Debug, Clone)]
pub struct UnitResult {
    pub serial_no: u32,
    pub code: String,
    pub write: RegistryWrite,
    /// Rendered document, if rendering succeeded
    pub artifact: Option<PathBuf>,
}

/// Per-batch counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub batch_id: String,
    pub requested: u32,
    pub written: u32,
    pub duplicates: u32,
    pub write_failures: u32,
    pub rendered: u32,
    pub render_failures: u32,
}

impl BatchSummary {
    pub fn new(batch_id: &str, requested: u32) -> Self {
        Self {
            batch_id: batch_id.to_string(),
            requested,
            ..Self::default()
        }
    }

    pub fn record(&mut self, unit: &UnitResult) {
        match unit.write {
            RegistryWrite::Written => self.written += 1,
            RegistryWrite::DuplicateKey => self.duplicates += 1,
            RegistryWrite::Failed(_) => self.write_failures += 1,
        }
        if unit.artifact.is_some() {
            self.rendered += 1;
        } else {
            self.render_failures += 1;
        }
    }

    /// Units left out of the archive
    pub fn skipped(&self) -> u32 {
        self.requested - self.rendered
    }
}

/// A finished archive waiting to be streamed
#[derive(Debug)]
pub struct PackagedBatch {
    pub summary: BatchSummary,
    pub archive_path: PathBuf,
    /// Download name offered to the client
    pub file_name: String,
    /// Owns the archive file until the response has been streamed
    pub scratch: ScratchFiles,
}

/// A single rendered document waiting to be streamed
#[derive(Debug)]
pub struct RenderedDocument {
    pub code: String,
    pub path: PathBuf,
    pub file_name: String,
    pub scratch: ScratchFiles,
}

/// Download name of a batch archive
pub fn archive_file_name(part_type: &str, start: u32, end: u32, timestamp_millis: i64) -> String {
    let part: String = part_type
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("QRCodes_{}_{}-{}_{}.zip", part, start, end, timestamp_millis)
}
