//! Integration tests for settings resolution: flags, environment, settings file and `.env`.

mod common;

use common::{dotpath_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

const DOC: &str = r#"{"a": {"b": 1}}"#;

#[test]
fn test_settings_file_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_file(
        temp_dir.path(),
        "settings.json",
        r#"{"path": {"delimiter": "/"}}"#,
    );

    dotpath_cmd()
        .arg("--config-path")
        .arg(&settings)
        .args(["get", "a/b"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_settings_file_from_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_file(
        temp_dir.path(),
        "settings.json",
        r#"{"output": {"format": "yaml"}}"#,
    );

    dotpath_cmd()
        .env("DOTPATH_CONFIG_PATH", &settings)
        .args(["get", "a"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("b: 1\n");
}

// The default location follows XDG_CONFIG_HOME only on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_default_location_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let app_dir = temp_dir.path().join("dotpath");
    std::fs::create_dir_all(&app_dir).unwrap();
    write_file(&app_dir, "config.json", r#"{"output": {"pretty": false}}"#);

    dotpath_cmd()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .args(["get"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("{\"a\":{\"b\":1}}\n");
}

#[test]
fn test_env_overrides_settings_file_and_flag_overrides_env() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_file(
        temp_dir.path(),
        "settings.json",
        r#"{"path": {"delimiter": "/"}}"#,
    );

    dotpath_cmd()
        .arg("--config-path")
        .arg(&settings)
        .env("DOTPATH_DELIMITER", ":")
        .args(["get", "a:b"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("1\n");

    dotpath_cmd()
        .arg("--config-path")
        .arg(&settings)
        .env("DOTPATH_DELIMITER", ":")
        .args(["-d", "|", "get", "a|b"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_pretty_env_false_compacts_output() {
    dotpath_cmd()
        .env("DOTPATH_PRETTY", "false")
        .args(["get"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("{\"a\":{\"b\":1}}\n");
}

#[test]
fn test_malformed_settings_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_file(temp_dir.path(), "settings.json", "{not json");

    dotpath_cmd()
        .arg("--config-path")
        .arg(&settings)
        .args(["get"])
        .write_stdin(DOC)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("settings.json"));
}

#[test]
fn test_dotenv_file_is_loaded_when_enabled() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "DOTPATH_DELIMITER=:\n");

    dotpath_cmd()
        .env_remove("DOTENV_DISABLED")
        .current_dir(temp_dir.path())
        .args(["get", "a:b"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_dotenv_file_is_ignored_when_disabled() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "DOTPATH_DELIMITER=:\n");

    dotpath_cmd()
        .current_dir(temp_dir.path())
        .args(["get", "a:b"])
        .write_stdin(DOC)
        .assert()
        .code(4);
}
