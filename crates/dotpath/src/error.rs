//! Error types for dotpath operations.
//!
//! Responsibilities:
//! - Define the error variants returned by fallible array operations.
//!
//! Does NOT handle:
//! - Missing paths or keys. Those resolve to a caller-supplied default and are
//!   never reported as errors.
//!
//! Invariants:
//! - Every variant carries the numbers needed to explain the failure.

use thiserror::Error;

/// Errors that can occur while operating on nested values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// More elements were requested than the container holds.
    #[error("You requested {requested} items, but there are only {available} items available.")]
    InvalidArgument { requested: usize, available: usize },
}

/// Result type alias for dotpath operations.
pub type Result<T> = std::result::Result<T, DotPathError>;
