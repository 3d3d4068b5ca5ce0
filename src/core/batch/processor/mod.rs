//! Batch processor module
//!
//! - `core`: BatchProcessor struct and public entry points
//! - `validation`: Request validation
//! - `execution`: Per-unit processing loop

pub mod core;
mod execution;
mod validation;
pub use validation::MAX_WARRANTY_YEARS;
