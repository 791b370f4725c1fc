//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the CLI's own error variants.
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library, config and I/O errors found anywhere in an error chain to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use dotpath::DotPathError;
use dotpath_config::ConfigError;
use thiserror::Error;

/// Errors raised by the command-line front end itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more paths do not resolve in the document.
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// The input or an argument cannot be used by the command.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Structured exit codes for dotpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A requested path does not exist in the document.
    ///
    /// Also returned by `has` when any path is missing.
    NotFound = 4,

    /// Validation error - malformed document, bad value or setting.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// I/O error - unreadable input, unwritable output or missing settings file.
    IoError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::PathNotFound(_) => ExitCode::NotFound,
            CliError::InvalidInput(_) => ExitCode::ValidationError,
        }
    }
}

impl From<&DotPathError> for ExitCode {
    fn from(err: &DotPathError) -> Self {
        match err {
            DotPathError::InvalidArgument { .. } => ExitCode::ValidationError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { .. } | ConfigError::ConfigFileParse { .. } => {
                ExitCode::ValidationError
            }
            ConfigError::DotenvParse { .. } => ExitCode::ValidationError,
            ConfigError::ConfigFileNotFound { .. }
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::DotenvIo { .. } => ExitCode::IoError,
            ConfigError::ConfigDirUnavailable(_) | ConfigError::DotenvUnknown => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// The first recognized error in the chain decides; anything else is a
    /// general error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<DotPathError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<serde_json::Error>().is_some()
                || cause.downcast_ref::<serde_yaml::Error>().is_some()
            {
                return ExitCode::ValidationError;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ExitCode::IoError;
            }
        }

        ExitCode::GeneralError
    }
}
