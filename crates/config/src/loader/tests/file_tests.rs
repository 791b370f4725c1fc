//! Settings file tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test reading nested and flat settings documents.
//! - Test file errors (missing explicit file, malformed JSON).
//! - Test precedence between the file and the environment.

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, write_config_file};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::OutputFormat;

fn clean_env<F: FnOnce()>(f: F) {
    temp_env::with_vars(
        [
            ("DOTPATH_DELIMITER", None::<&str>),
            ("DOTPATH_OUTPUT_FORMAT", None),
            ("DOTPATH_PRETTY", None),
            ("DOTPATH_CONFIG_PATH", None),
        ],
        f,
    );
}

#[test]
#[serial]
fn test_file_values_applied() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(
        temp_dir.path(),
        r#"{"path": {"delimiter": "/"}, "output": {"format": "yaml", "pretty": false}}"#,
    );

    clean_env(|| {
        let config = ConfigLoader::new()
            .with_config_path(config_path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.delimiter, '/');
        assert_eq!(config.output_format, OutputFormat::Yaml);
        assert!(!config.pretty);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(
        temp_dir.path(),
        r#"{"path": {"delimiter": "/"}, "output": {"format": "yaml"}}"#,
    );

    clean_env(|| {
        temp_env::with_var("DOTPATH_DELIMITER", Some(":"), || {
            // File read first, env second: env must still win.
            let config = ConfigLoader::new()
                .with_config_path(config_path.clone())
                .from_file()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.delimiter, ':');
            assert_eq!(config.output_format, OutputFormat::Yaml);
        });
    });
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.json");

    let result = ConfigLoader::new()
        .with_config_path(missing.clone())
        .from_file();
    match result {
        Err(ConfigError::ConfigFileNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected ConfigFileNotFound, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_malformed_file_is_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(temp_dir.path(), "{ not json");

    let result = ConfigLoader::new()
        .with_config_path(config_path.clone())
        .from_file();
    assert!(matches!(
        result,
        Err(ConfigError::ConfigFileParse { ref path, .. }) if *path == config_path
    ));
}

#[test]
#[serial]
fn test_invalid_file_value_names_the_key() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(temp_dir.path(), r#"{"path": {"delimiter": "ab"}}"#);

    let result = ConfigLoader::new()
        .with_config_path(config_path)
        .from_file();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "path.delimiter"
    ));
}
