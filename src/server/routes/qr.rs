//! Label generation and scan endpoints
//!
//! Mounted under `/api/qr`. The batch listing route is registered ahead of the
//! two-segment scan route, so `batch` is never treated as a part prefix.

use crate::core::batch::{BatchGenerateRequest, SingleDocumentRequest};
use crate::core::codes::known_part_types;
use crate::core::registry::CodeRecord;
use crate::core::scan::ScanOutcome;
use crate::server::state::AppState;
use crate::server::streaming::stream_and_cleanup;
use crate::storage::files::LocalStorage;
use crate::utils::error::RegistryError;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Configure QR routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/qr")
            .route("/batch-generate", web::post().to(batch_generate))
            .route("/generate-pdf", web::post().to(generate_pdf))
            .route("/part-types", web::get().to(part_types))
            .route("/batch/{batch_id}", web::get().to(batch_records))
            .route("/{prefix}/{year_month_code}", web::get().to(scan)),
    );
}

fn attachment(file_name: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(file_name.to_string())],
    }
}

/// Generate, register and archive a serial range, streaming the archive back
async fn batch_generate(
    state: web::Data<AppState>,
    request: web::Json<BatchGenerateRequest>,
) -> Result<HttpResponse, RegistryError> {
    let packaged = state.batches.run_batch(&request).await?;
    let summary = &packaged.summary;

    info!(
        batch_id = %summary.batch_id,
        file_name = %packaged.file_name,
        "Streaming batch archive"
    );

    Ok(HttpResponse::Ok()
        .content_type(LocalStorage::detect_content_type(&packaged.file_name))
        .insert_header(attachment(&packaged.file_name))
        .insert_header(("X-Batch-Id", summary.batch_id.clone()))
        .insert_header(("X-Batch-Rendered", summary.rendered.to_string()))
        .insert_header(("X-Batch-Skipped", summary.skipped().to_string()))
        .streaming(stream_and_cleanup(packaged.archive_path, packaged.scratch)))
}

/// Render one label document without registering it
async fn generate_pdf(
    state: web::Data<AppState>,
    request: web::Json<SingleDocumentRequest>,
) -> Result<HttpResponse, RegistryError> {
    let document = state.batches.render_single(&request).await?;
    debug!(code = %document.code, "Streaming single document");

    Ok(HttpResponse::Ok()
        .content_type(LocalStorage::detect_content_type(&document.file_name))
        .insert_header(attachment(&document.file_name))
        .streaming(stream_and_cleanup(document.path, document.scratch)))
}

async fn part_types() -> HttpResponse {
    HttpResponse::Ok().json(known_part_types())
}

/// All records of one batch
async fn batch_records(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, RegistryError> {
    let batch_id = path.into_inner();
    let records = state.scans.batch_records(&batch_id).await?;

    if records.is_empty() {
        return Err(RegistryError::not_found(format!(
            "No QR codes found for batch {}",
            batch_id
        )));
    }

    Ok(HttpResponse::Ok().json(records))
}

/// Resolve a scanned label URL
async fn scan(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, RegistryError> {
    let (prefix, year_month_code) = path.into_inner();

    match state.scans.resolve(&prefix, &year_month_code).await? {
        ScanOutcome::Found(record) => Ok(HttpResponse::Ok().json(ScanFound {
            success: true,
            message: "QR code found",
            data: ScanData::from(&record),
            scanned_at: Utc::now(),
        })),
        ScanOutcome::NotFound { code } => Ok(HttpResponse::NotFound().json(ScanMissing {
            error: "QR code not found",
            message: format!("No registered part matches code {}", code),
            scanned_code: code,
        })),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanFound {
    success: bool,
    message: &'static str,
    data: ScanData,
    scanned_at: DateTime<Utc>,
}

/// Record fields exposed to scanners
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanData {
    code: String,
    part_type: String,
    serial_no: u32,
    manufacturer_name: String,
    manufacture_date: NaiveDate,
    lot_no: String,
    warranty_years: u32,
    expiry_date: NaiveDate,
    batch_id: String,
    created_at: DateTime<Utc>,
}

impl From<&CodeRecord> for ScanData {
    fn from(record: &CodeRecord) -> Self {
        Self {
            code: record.code.clone(),
            part_type: record.part_type.clone(),
            serial_no: record.serial_no,
            manufacturer_name: record.manufacturer_name.clone(),
            manufacture_date: record.manufacture_date,
            lot_no: record.lot_no.clone(),
            warranty_years: record.warranty_years,
            expiry_date: record.expiry_date,
            batch_id: record.batch_id.clone(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanMissing {
    error: &'static str,
    message: String,
    scanned_code: String,
}
