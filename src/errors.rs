//! Error types for reference parsing.
//!
//! Every variant carries the offending text verbatim so it can be corrected
//! at the source data.

use thiserror::Error;

/// Errors that can occur while parsing or constructing a reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The text matches none of the applicable grammars.
    #[error("unable to parse reference {0:?}")]
    MalformedReference(String),

    /// The book code is not known to the registry.
    #[error("invalid book code {code:?} in {reference:?}")]
    InvalidBookCode { code: String, reference: String },

    /// The end of a range precedes its start.
    #[error("range end precedes range start in {0:?}")]
    InvalidRangeOrder(String),

    /// Entries of a list (or compound) are out of order or contiguous.
    #[error("verses out of order or contiguous in {0:?}")]
    InvalidListOrder(String),
}

impl ReferenceError {
    /// Stable variant name, as used by fixture files.
    pub fn name(&self) -> &'static str {
        match self {
            ReferenceError::MalformedReference(_) => "MalformedReference",
            ReferenceError::InvalidBookCode { .. } => "InvalidBookCode",
            ReferenceError::InvalidRangeOrder(_) => "InvalidRangeOrder",
            ReferenceError::InvalidListOrder(_) => "InvalidListOrder",
        }
    }

    /// The text the error was raised for.
    pub fn reference_text(&self) -> &str {
        match self {
            ReferenceError::MalformedReference(text)
            | ReferenceError::InvalidRangeOrder(text)
            | ReferenceError::InvalidListOrder(text) => text,
            ReferenceError::InvalidBookCode { reference, .. } => reference,
        }
    }
}

/// Result type for reference operations.
pub type ReferenceResult<T> = Result<T, ReferenceError>;
