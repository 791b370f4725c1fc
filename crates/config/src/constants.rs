//! Centralized constants for the dotpath workspace.
//!
//! Environment variable names, settings-file keys and defaults shared by the
//! loader and the command-line front end.

// =============================================================================
// Defaults
// =============================================================================

/// Default path delimiter.
pub const DEFAULT_DELIMITER: char = dotpath::DEFAULT_DELIMITER;

/// Whether output is pretty-printed unless configured otherwise.
pub const DEFAULT_PRETTY: bool = true;

// =============================================================================
// Environment variables
// =============================================================================

/// Path delimiter override.
pub const ENV_DELIMITER: &str = "DOTPATH_DELIMITER";

/// Output format override (`json` or `yaml`).
pub const ENV_OUTPUT_FORMAT: &str = "DOTPATH_OUTPUT_FORMAT";

/// Pretty-printing override (`true` or `false`).
pub const ENV_PRETTY: &str = "DOTPATH_PRETTY";

/// Settings file location override.
pub const ENV_CONFIG_PATH: &str = "DOTPATH_CONFIG_PATH";

/// When `1` or `true`, `.env` files are not loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Settings file
// =============================================================================

/// Application name used for the platform configuration directory.
pub const APP_NAME: &str = "dotpath";

/// Settings file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Dotted key holding the delimiter in the settings file.
pub const FILE_KEY_DELIMITER: &str = "path.delimiter";

/// Dotted key holding the output format in the settings file.
pub const FILE_KEY_OUTPUT_FORMAT: &str = "output.format";

/// Dotted key holding the pretty-printing flag in the settings file.
pub const FILE_KEY_PRETTY: &str = "output.pretty";
