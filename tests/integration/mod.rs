//! Integration tests for railqr
//!
//! These tests drive the HTTP surface and the registry store with real
//! components: an in-memory SQLite registry, the PDF renderer and a temporary
//! uploads directory.

pub mod batch_tests;
pub mod config_validation_tests;
pub mod database_tests;
pub mod scan_tests;
