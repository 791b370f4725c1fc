//! Shared test utilities for dotpath integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep host settings files and `DOTPATH_*` variables out of the tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The default settings file location points at a directory that does not exist.

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a hermetic `dotpath` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `DOTPATH_*` variables are cleared to ensure no leakage from the host.
/// - The platform config directory resolves to an empty location.
pub fn dotpath_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotpath");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("DOTPATH_DELIMITER")
        .env_remove("DOTPATH_OUTPUT_FORMAT")
        .env_remove("DOTPATH_PRETTY")
        .env_remove("DOTPATH_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd.env(
        "XDG_CONFIG_HOME",
        std::env::temp_dir().join("dotpath-tests-no-config-home"),
    );

    cmd
}

/// Write `contents` to `name` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}
