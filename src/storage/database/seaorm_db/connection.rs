use crate::config::DatabaseConfig;
use crate::utils::error::{RegistryError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

/// Local registry used when a configured PostgreSQL server is unreachable
const FALLBACK_SQLITE_URL: &str = "sqlite://data/railqr.db?mode=rwc";

impl SeaOrmDatabase {
    /// Connect to the configured registry store, falling back to a local SQLite
    /// file when PostgreSQL is unreachable
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match Self::try_connect(&config.url, config).await {
            Ok(db) => {
                let backend_type = if config.is_sqlite() {
                    DatabaseBackendType::SQLite
                } else {
                    DatabaseBackendType::PostgreSQL
                };
                info!("Database connection established ({:?})", backend_type);
                Ok(Self { db, backend_type })
            }
            Err(e) if !config.is_sqlite() => {
                warn!(
                    "PostgreSQL connection failed: {}. Attempting SQLite fallback...",
                    e
                );
                Self::fallback_to_sqlite(config).await
            }
            Err(e) => Err(e),
        }
    }

    /// Connect and run migrations
    pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::new(config).await?;
        db.migrate().await?;
        Ok(db)
    }

    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        if let Some(dir) = sqlite_parent_dir(url) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                RegistryError::Internal(format!("Failed to create data directory: {}", e))
            })?;
        }

        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // in-memory databases vanish with their last connection
        if url.contains(":memory:") {
            opt.idle_timeout(Duration::from_secs(u32::MAX as u64))
                .max_lifetime(Duration::from_secs(u32::MAX as u64));
        } else {
            opt.idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        Database::connect(opt).await.map_err(RegistryError::Database)
    }

    async fn fallback_to_sqlite(config: &DatabaseConfig) -> Result<Self> {
        info!("Falling back to SQLite database: {}", FALLBACK_SQLITE_URL);

        let fallback = DatabaseConfig {
            url: FALLBACK_SQLITE_URL.to_string(),
            ..config.clone()
        };
        let db = Self::try_connect(&fallback.url, &fallback).await?;

        info!("SQLite fallback connection established successfully");
        Ok(Self {
            db,
            backend_type: DatabaseBackendType::SQLite,
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            RegistryError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(RegistryError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::CodeRecord::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Registry statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            total_records: self.count_records().await?,
            backend: self.backend_type,
        })
    }
}

/// Parent directory of a file-backed SQLite URL
fn sqlite_parent_dir(url: &str) -> Option<&Path> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next()?;
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
