//! Error handling for the registry service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{RegistryError, Result};
