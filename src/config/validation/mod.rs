//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Service, server, code and file validators
//! - `storage_validators`: Database validators

mod config_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
