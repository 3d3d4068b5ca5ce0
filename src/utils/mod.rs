//! Utility modules for the registry service
//!
//! - **error**: Error types and HTTP error responses
//! - **logging**: Subscriber initialisation

pub mod error;
pub mod logging;

pub use logging::{init_logging, startup_logging};
