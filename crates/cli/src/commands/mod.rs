//! CLI command implementations.
//!
//! Every command takes the parsed input document and returns an [`Outcome`];
//! deciding where the outcome is written is left to `dispatch`.

pub mod access;
pub mod select;
pub mod transform;

use serde_json::Value;

/// What a command produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A value derived from the document.
    Value(Value),
    /// The rewritten document.
    Document(Value),
    /// A value taken out of the document, and what is left of it.
    Extracted { value: Value, document: Value },
    /// A yes/no answer.
    Flag(bool),
}
