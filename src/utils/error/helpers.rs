//! Helper functions for creating specific error types

use super::types::RegistryError;

/// Helper functions for creating specific errors
impl RegistryError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn empty_batch<S: Into<String>>(message: S) -> Self {
        Self::EmptyBatch(message.into())
    }

    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    pub fn archive<S: Into<String>>(message: S) -> Self {
        Self::Archive(message.into())
    }

    pub fn file_storage<S: Into<String>>(message: S) -> Self {
        Self::FileStorage(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::BadRequest(_) | Self::NotFound(_)
        )
    }
}

impl From<tokio::task::JoinError> for RegistryError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("Background task failed: {}", err))
    }
}
