//! Core functionality of the registry service
//!
//! Leaves first: code derivation, document rendering and the registry seam, then
//! the batch pipeline and scan resolution built on them.

pub mod batch;
pub mod codes;
pub mod registry;
pub mod render;
pub mod scan;
