//! Path helpers for the settings file location.
//!
//! Responsibilities:
//! - Determine the platform-appropriate settings file path.
//!
//! Does NOT handle:
//! - File I/O operations (see `loader/file.rs`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/dotpath/config.json`
/// - macOS: `~/Library/Application Support/dotpath/config.json`
/// - Windows: `%AppData%\dotpath\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "dotpath")
            .unwrap()
            .config_dir()
            .join("config.json");

        let actual = default_config_path().unwrap();
        assert_eq!(actual, expected);
        assert!(actual.ends_with("config.json"));
    }
}
