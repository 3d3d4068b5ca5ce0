//! Core BatchProcessor struct and public API methods

use super::super::archive::pack_archive;
use super::super::types::*;
use crate::config::CodeConfig;
use crate::core::codes::DerivedCode;
use crate::core::registry::CodeRegistry;
use crate::core::render::DocumentRenderer;
use crate::storage::files::{LocalStorage, ScratchFiles};
use crate::utils::error::{RegistryError, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Drives derivation, registry writes, rendering and packaging for one request
#[derive(Clone)]
pub struct BatchProcessor {
    pub(super) registry: Arc<dyn CodeRegistry>,
    pub(super) renderer: Arc<dyn DocumentRenderer>,
    pub(super) storage: Arc<LocalStorage>,
    pub(super) codes: CodeConfig,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(
        registry: Arc<dyn CodeRegistry>,
        renderer: Arc<dyn DocumentRenderer>,
        storage: Arc<LocalStorage>,
        codes: CodeConfig,
    ) -> Self {
        Self {
            registry,
            renderer,
            storage,
            codes,
        }
    }

    pub fn codes(&self) -> &CodeConfig {
        &self.codes
    }

    /// Run a batch request to a finished archive.
    ///
    /// Rendered documents are deleted once the archive is finalized. The
    /// returned [`PackagedBatch`] owns the archive file.
    pub async fn run_batch(&self, request: &BatchGenerateRequest) -> Result<PackagedBatch> {
        let spec = self.validate_batch_request(request)?;
        let batch_id = Uuid::new_v4().to_string();

        info!(
            batch_id = %batch_id,
            part_type = %spec.part_type,
            start = spec.start,
            end = spec.end,
            "Starting batch"
        );

        let mut documents = ScratchFiles::new();
        let dir = self.storage.create_batch_dir(&batch_id).await?;
        documents.track_dir(&dir);

        let (summary, artifacts) = self.process_units(&spec, &batch_id, &dir).await;
        for artifact in &artifacts {
            documents.track_file(artifact);
        }

        info!(
            batch_id = %batch_id,
            requested = summary.requested,
            written = summary.written,
            duplicates = summary.duplicates,
            write_failures = summary.write_failures,
            rendered = summary.rendered,
            render_failures = summary.render_failures,
            "Batch units processed"
        );

        if artifacts.is_empty() {
            documents.cleanup().await;
            return Err(RegistryError::EmptyBatch(format!(
                "all {} units of batch {} failed to render",
                summary.requested, batch_id
            )));
        }

        let archive_path = self.storage.archive_path(&batch_id);
        let mut archive = ScratchFiles::new();
        archive.track_file(&archive_path);

        let packed = pack_archive(artifacts, &archive_path).await;
        documents.cleanup().await;

        match packed {
            Ok(stats) => {
                info!(
                    batch_id = %batch_id,
                    entries = stats.entries,
                    bytes = stats.bytes,
                    "Batch archive ready"
                );
                Ok(PackagedBatch {
                    file_name: archive_file_name(
                        &spec.part_type,
                        spec.start,
                        spec.end,
                        Utc::now().timestamp_millis(),
                    ),
                    summary,
                    archive_path,
                    scratch: archive,
                })
            }
            Err(e) => {
                error!(batch_id = %batch_id, error = %e, "Batch packaging failed");
                archive.cleanup().await;
                Err(e)
            }
        }
    }

    /// Render one document without writing a registry record
    pub async fn render_single(&self, request: &SingleDocumentRequest) -> Result<RenderedDocument> {
        let (part_type, manufacture_date, serial_no) = self.validate_single_request(request)?;
        let derived = DerivedCode::new(
            &part_type,
            manufacture_date,
            serial_no,
            self.codes.normalized_base_url(),
        );

        let mut scratch = ScratchFiles::new();
        let dir = self.storage.create_scratch_dir().await?;
        scratch.track_dir(&dir);

        match self.renderer.render(&derived.code, &derived.url, &dir).await {
            Ok(path) => {
                info!(code = %derived.code, "Rendered single document");
                scratch.track_file(&path);
                Ok(RenderedDocument {
                    file_name: format!("QR_{}.pdf", derived.code),
                    code: derived.code,
                    path,
                    scratch,
                })
            }
            Err(e) => {
                error!(code = %derived.code, error = %e, "Single document render failed");
                scratch.cleanup().await;
                Err(e)
            }
        }
    }
}
