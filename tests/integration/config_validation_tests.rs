//! Configuration loading and validation tests

#[cfg(test)]
mod tests {
    use railqr::config::models::{CodeConfig, DatabaseConfig, FileStorageConfig, MAX_BATCH_UNITS};
    use railqr::config::{Config, LogFormat, Validate};
    use railqr::utils::error::RegistryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_falls_back_when_file_missing() {
        let config = Config::load("/nonexistent/railqr.yaml").await.unwrap();
        assert!(config.codes().max_batch_size <= MAX_BATCH_UNITS);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_example_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/railqr.yaml.example");
        let config = Config::from_file(path).await.unwrap();

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.codes().max_batch_size, 1000);
        assert_eq!(config.logging().format, LogFormat::Text);
    }

    #[tokio::test]
    async fn test_unsupported_database_rejected_on_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"storage:\n  database:\n    url: \"mysql://localhost/railqr\"\n")
            .unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
        assert!(err.to_string().contains("Storage config error"));
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server: [port: 80\n").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_batch_size_bounds() {
        let too_small = CodeConfig {
            max_batch_size: 0,
            ..CodeConfig::default()
        };
        assert!(too_small.validate().is_err());

        let at_limit = CodeConfig {
            max_batch_size: MAX_BATCH_UNITS,
            ..CodeConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let files = FileStorageConfig {
            uploads_dir: "  ".to_string(),
        };
        assert!(files.validate().is_err());

        let database = DatabaseConfig {
            url: String::new(),
            ..DatabaseConfig::in_memory()
        };
        assert!(database.validate().is_err());
    }
}
