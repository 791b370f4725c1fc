//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables, the settings file, and direct builder methods.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Settings file loading logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Each source fills its own layer, so precedence does not depend on call order:
//!   builder methods > environment variables > settings file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use super::parse::validate_delimiter;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_PRETTY, ENV_DOTENV_DISABLED};
use crate::types::{Config, OutputFormat};

/// Settings contributed by one source. Unset fields defer to lower layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SettingsLayer {
    pub(crate) delimiter: Option<char>,
    pub(crate) output_format: Option<OutputFormat>,
    pub(crate) pretty: Option<bool>,
}

impl SettingsLayer {
    /// Fill the unset fields of `self` from `lower`.
    fn or(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            delimiter: self.delimiter.or(lower.delimiter),
            output_format: self.output_format.or(lower.output_format),
            pretty: self.pretty.or(lower.pretty),
        }
    }
}

/// Configuration loader that builds config from overrides, environment variables and the settings file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    overrides: SettingsLayer,
    env: SettingsLayer,
    file: SettingsLayer,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("dotenv loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the settings file path.
    ///
    /// An explicit path must exist when `from_file` runs.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read settings from the JSON settings file.
    ///
    /// Call after [`from_env`](Self::from_env) so `DOTPATH_CONFIG_PATH` is honored.
    /// A missing file at the default location is not an error.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read settings from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the path delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.overrides.delimiter = Some(delimiter);
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.overrides.output_format = Some(format);
        self
    }

    /// Set whether output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.overrides.pretty = Some(pretty);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let merged = self.overrides.or(self.env).or(self.file);
        let delimiter =
            validate_delimiter("delimiter", merged.delimiter.unwrap_or(DEFAULT_DELIMITER))?;

        let config = Config {
            delimiter,
            output_format: merged.output_format.unwrap_or_default(),
            pretty: merged.pretty.unwrap_or(DEFAULT_PRETTY),
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_env_layer(&mut self, layer: SettingsLayer) {
        self.env = layer;
    }

    pub(crate) fn set_file_layer(&mut self, layer: SettingsLayer) {
        self.file = layer;
    }
}
