//! Dotted-path access to nested JSON-like values.
//!
//! This crate treats a nested [`serde_json::Value`] (mappings of mappings,
//! mappings of sequences) as if it were addressed by delimiter-separated
//! paths such as `"database.connections.0.host"`, and provides the
//! array-level transforms that usually travel with such an accessor.
//!
//! - [`PathAccessor`]: `get`, `set`, `has`, `forget`, `pull`, `add`, `dot`,
//!   `undot`, `pluck` and `sort_by` over paths.
//! - Free functions: selection ([`only`], [`except`], [`filter`], [`first`],
//!   [`last`], [`divide`], [`cross_join`]), flattening ([`flatten`],
//!   [`collapse`]), ordering ([`is_assoc`], [`sort_recursive`], [`wrap`],
//!   [`prepend`]) and randomness ([`random`], [`random_one`], [`shuffle`]).
//!
//! Mappings keep insertion order (`serde_json` is built with
//! `preserve_order`). The only fallible operation is random selection.

mod accessor;
mod error;
mod flatten;
mod node;
mod order;
mod path;
mod random;
mod select;

pub use accessor::PathAccessor;
pub use error::{DotPathError, Result};
pub use flatten::{collapse, flatten, merge_into};
pub use node::{
    Entries, Key, accessible, compare_keys, compare_values, container_len, entries, exists,
};
pub use order::{is_assoc, prepend, sort_recursive, wrap};
pub use path::{DEFAULT_DELIMITER, Path};
pub use random::{random, random_one, random_one_with, random_with, shuffle, shuffle_with};
pub use select::{
    cross_join, divide, except, filter, first, first_or_else, last, last_or_else, only,
};
