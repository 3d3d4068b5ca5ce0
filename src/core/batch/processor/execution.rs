//! Per-unit batch execution

use super::super::types::*;
use super::core::BatchProcessor;
use crate::core::codes::DerivedCode;
use crate::core::registry::RegistryWrite;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

impl BatchProcessor {
    /// Process every serial number in order, collecting rendered documents
    pub(super) async fn process_units(
        &self,
        spec: &BatchSpec,
        batch_id: &str,
        dir: &Path,
    ) -> (BatchSummary, Vec<PathBuf>) {
        let mut summary = BatchSummary::new(batch_id, spec.units());
        let mut artifacts = Vec::new();

        for serial_no in spec.serials() {
            let unit = self.process_unit(spec, batch_id, serial_no, dir).await;
            summary.record(&unit);
            if let Some(path) = unit.artifact {
                artifacts.push(path);
            }
        }

        (summary, artifacts)
    }

    /// Derive, write and render one serial number.
    ///
    /// Rendering is attempted whatever the outcome of the registry write.
    pub(super) async fn process_unit(
        &self,
        spec: &BatchSpec,
        batch_id: &str,
        serial_no: u32,
        dir: &Path,
    ) -> UnitResult {
        let derived = DerivedCode::new(
            &spec.part_type,
            spec.manufacture_date,
            serial_no,
            self.codes.normalized_base_url(),
        );

        let write = self
            .registry
            .write(&spec.record(batch_id, serial_no, &derived))
            .await;
        match &write {
            RegistryWrite::Written => {
                debug!(batch_id, code = %derived.code, serial_no, "Registry record written")
            }
            RegistryWrite::DuplicateKey => {
                warn!(batch_id, code = %derived.code, serial_no, "Duplicate code, registry write skipped")
            }
            RegistryWrite::Failed(reason) => {
                error!(batch_id, code = %derived.code, serial_no, reason = %reason, "Registry write failed")
            }
        }

        let artifact = match self.renderer.render(&derived.code, &derived.url, dir).await {
            Ok(path) => {
                debug!(batch_id, code = %derived.code, path = %path.display(), "Document rendered");
                Some(path)
            }
            Err(e) => {
                warn!(batch_id, code = %derived.code, serial_no, error = %e, "Document render failed, unit skipped");
                None
            }
        };

        UnitResult {
            serial_no,
            code: derived.code,
            write,
            artifact,
        }
    }
}
