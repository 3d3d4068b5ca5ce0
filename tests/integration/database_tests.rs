//! Registry store integration tests
//!
//! Uses real SQLite databases, in memory and on disk.

#[cfg(test)]
mod tests {
    use crate::common::{CodeRecordFactory, TestDatabase};
    use railqr::config::DatabaseConfig;
    use railqr::core::registry::{CodeRegistry, RegistryWrite};
    use railqr::storage::database::{Database, DatabaseBackendType};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_database_health_and_backend() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let stats = db.db().stats().await.unwrap();
        assert_eq!(stats.total_records, 0);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }

    #[tokio::test]
    async fn test_records_survive_reconnect() {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!(
                "sqlite://{}?mode=rwc",
                dir.path().join("nested").join("registry.db").display()
            ),
            max_connections: 2,
            connection_timeout: 5,
        };
        let record = CodeRecordFactory::create(21, "batch-persist");

        {
            let db = Database::new(&config).await.unwrap();
            db.migrate().await.unwrap();
            assert_eq!(db.write(&record).await, RegistryWrite::Written);
            db.close().await.unwrap();
        }

        let db = TestDatabase::with_config(&config).await;
        let found = db.db().find_by_code_or_id(&record.code).await.unwrap();
        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn test_concurrent_batches_detect_collisions() {
        let db = TestDatabase::new().await;
        let first = CodeRecordFactory::create(1, "batch-x");
        let second = CodeRecordFactory::create(1, "batch-y");

        let (a, b) = tokio::join!(db.db().write(&first), db.db().write(&second));

        let mut outcomes = vec![a, b];
        outcomes.sort_by_key(|o| !o.is_written());
        assert_eq!(outcomes, vec![RegistryWrite::Written, RegistryWrite::DuplicateKey]);
        assert_eq!(db.db().count_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_by_unknown_batch_is_empty() {
        let db = TestDatabase::new().await;
        db.db().write(&CodeRecordFactory::create(1, "batch-z")).await;

        assert!(db.db().list_by_batch("other").await.unwrap().is_empty());
        assert_eq!(db.db().list_by_batch("batch-z").await.unwrap().len(), 1);
    }
}
