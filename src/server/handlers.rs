//! HTTP route handlers shared by the whole application

use crate::utils::error::RegistryError;
use actix_web::{Error, HttpRequest, HttpResponse, error::JsonPayloadError};
use serde_json::json;
use tracing::debug;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Report malformed JSON bodies with the standard error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!(path = %req.path(), error = %err, "Rejected request body");
    RegistryError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}
