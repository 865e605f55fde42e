#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsurf::libs::config::{Config, StorageBackend, StorageConfig};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("tsurf").join("config.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.storage.is_none());
        assert_eq!(config.storage().backend, StorageBackend::Json);
        assert!(config.storage().data_file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.storage_mut().backend = StorageBackend::Sqlite;
        config.storage_mut().data_file = Some(PathBuf::from("/tmp/days.db"));
        config.save_to(&ctx.config_path).unwrap();

        let loaded = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(
            loaded.storage,
            Some(StorageConfig {
                backend: StorageBackend::Sqlite,
                data_file: Some(PathBuf::from("/tmp/days.db")),
            })
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_sections_are_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path).unwrap();
        let content = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert!(!content.contains("storage"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_storage_section(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        std::fs::write(&ctx.config_path, r#"{ "storage": {} }"#).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.storage(), StorageConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_backend_names(_ctx: &mut ConfigTestContext) {
        let names: Vec<&str> = StorageBackend::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["json", "sqlite"]);

        let parsed: StorageConfig = serde_json::from_str(r#"{ "backend": "sqlite" }"#).unwrap();
        assert_eq!(parsed.backend, StorageBackend::Sqlite);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        std::fs::write(&ctx.config_path, "not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }
}
