//! Batch code generation
//!
//! Iterates a serial-number range, writes one registry record and renders one
//! document per serial number, then packages every rendered document into a
//! single archive. Individual units may fail without failing the batch.

mod archive;
mod processor;
mod types;


// Re-export all public types
pub use archive::{ArchiveStats, pack_archive};
pub use processor::MAX_WARRANTY_YEARS;
pub use processor::core::BatchProcessor;
pub use types::{
    BatchGenerateRequest, BatchSpec, BatchSummary, PackagedBatch, RenderedDocument,
    SingleDocumentRequest, UnitResult, archive_file_name,
};
