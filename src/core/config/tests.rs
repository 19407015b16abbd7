use super::data::{Config, SettingError};
use super::io::ConfigError;
use crate::core::mapper::{ExpirationPolicy, ResponseMapper};
use crate::core::scopes::ScopeSplit;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.mapper(), ResponseMapper::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config
        .apply_setting("scope-split", Some("complete"))
        .expect("scope-split should be accepted");
    config
        .apply_setting("expiration", Some("NULL"))
        .expect("expiration should be accepted");
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.scope_split, Some(ScopeSplit::Complete));
    assert_eq!(loaded.expiration, Some(ExpirationPolicy::Null));
    assert_eq!(
        loaded.mapper(),
        ResponseMapper::new(ScopeSplit::Complete, ExpirationPolicy::Null)
    );

    let mut loaded = loaded;
    loaded
        .apply_setting("scope-split", None)
        .expect("unset should succeed");
    loaded
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let reloaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(reloaded.scope_split, None);
    assert_eq!(reloaded.expiration, Some(ExpirationPolicy::Null));
}

#[test]
fn test_config_reads_kebab_case_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "scope-split = \"complete\"\nexpiration = \"omit\"\nlog-filter = \"debug\"\n",
    )
    .expect("Failed to write config");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.scope_split, Some(ScopeSplit::Complete));
    assert_eq!(config.expiration, Some(ExpirationPolicy::Omit));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "scope-split = \"sometimes\"\n").expect("Failed to write config");

    let err = Config::load_from_path(&config_path).expect_err("invalid value should fail");

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_apply_setting_rejects_unknown_key_and_value() {
    let mut config = Config::default();

    assert_eq!(
        config.apply_setting("theme", Some("dark")),
        Err(SettingError::UnknownKey("theme".to_string()))
    );
    assert!(matches!(
        config.apply_setting("expiration", Some("sometimes")),
        Err(SettingError::InvalidValue {
            key: "expiration",
            ..
        })
    ));
    assert_eq!(config, Config::default());
}

#[test]
fn test_blank_log_filter_falls_back_to_default() {
    let mut config = Config::default();
    config
        .apply_setting("log-filter", Some("   "))
        .expect("log-filter should be accepted");

    assert_eq!(config.log_filter, None);
    assert_eq!(config.log_filter(), super::data::DEFAULT_LOG_FILTER);
}
