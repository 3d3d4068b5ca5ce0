//! HTTP response handling for errors

use super::types::RegistryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl RegistryError {
    /// Short, stable error title shown to API clients
    pub fn title(&self) -> &'static str {
        match self {
            RegistryError::Config(_) => "Configuration error",
            RegistryError::Database(_) => "Database operation failed",
            RegistryError::Serialization(_) | RegistryError::Yaml(_) => "Serialization failed",
            RegistryError::Io(_) | RegistryError::FileStorage(_) => "File storage failed",
            RegistryError::Validation(_) => "Validation failed",
            RegistryError::NotFound(_) => "Not found",
            RegistryError::BadRequest(_) => "Bad request",
            RegistryError::EmptyBatch(_) => "No QR codes were generated",
            RegistryError::Render(_) => "Document rendering failed",
            RegistryError::Archive(_) => "Failed to create ZIP archive",
            RegistryError::Internal(_) => "Internal server error",
        }
    }

    /// Details safe to expose to clients.
    ///
    /// Render and archive messages name paths under the uploads directory, so
    /// they only reach the log.
    fn public_details(&self) -> Option<String> {
        match self {
            RegistryError::Validation(msg)
            | RegistryError::NotFound(msg)
            | RegistryError::BadRequest(msg)
            | RegistryError::EmptyBatch(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Validation(_) | RegistryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: self.title().to_string(),
            details: self.public_details(),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
