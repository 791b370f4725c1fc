//! Resolved settings types.
//!
//! Responsibilities:
//! - Define the `Config` produced by `ConfigLoader::build`.
//! - Define `OutputFormat` and its textual forms.
//!
//! Does NOT handle:
//! - Reading settings from any source (see `loader`).

use std::fmt;
use std::str::FromStr;

use dotpath::PathAccessor;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_PRETTY};

/// Serialization format for documents written by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parse a format name, case-insensitively. `yml` is accepted for YAML.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("expected json or yaml, got '{other}'")),
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Character separating path segments.
    pub delimiter: char,
    /// Format used when writing documents.
    pub output_format: OutputFormat,
    /// Whether documents are pretty-printed.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            output_format: OutputFormat::default(),
            pretty: DEFAULT_PRETTY,
        }
    }
}

impl Config {
    /// Path accessor using the configured delimiter.
    pub fn accessor(&self) -> PathAccessor {
        PathAccessor::with_delimiter(self.delimiter)
    }
}
