//! Error types for the registry service

use thiserror::Error;

/// Result type alias for the registry service
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for the registry service
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Every unit of a batch was skipped
    #[error("No documents were generated: {0}")]
    EmptyBatch(String),

    /// Document rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Archive packaging errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
