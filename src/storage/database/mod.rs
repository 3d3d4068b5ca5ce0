//! SeaORM-backed code registry

pub mod entities;
pub mod migration;
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, DatabaseStats};
