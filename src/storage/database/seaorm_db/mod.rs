// Module declarations
mod code_ops;
mod connection;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
