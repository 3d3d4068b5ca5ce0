//! Isolated registries for integration tests

use railqr::config::DatabaseConfig;
use railqr::storage::database::Database;
use std::sync::Arc;

/// A migrated in-memory SQLite registry, shared by clone
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    pub async fn new() -> Self {
        Self::with_config(&test_db_config()).await
    }

    /// Connect and migrate with an explicit config, e.g. a file-backed URL
    pub async fn with_config(config: &DatabaseConfig) -> Self {
        let db = Database::new(config)
            .await
            .expect("registry connection for tests");
        db.migrate().await.expect("registry migrations for tests");
        Self {
            inner: Arc::new(db),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }

    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// In-memory URL with a short connect timeout
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        connection_timeout: 5,
        ..DatabaseConfig::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_registry_is_empty() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db_arc().count_records().await.unwrap(), 0);
    }
}
