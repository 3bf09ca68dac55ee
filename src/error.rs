//! Error types for call number operations.
//!
//! This module provides the [`CallNumberError`] type for all call number parsing
//! and validation failures, and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all call number operations.
///
/// Lexing failures never surface here: a scanner that matches nothing only
/// tells the enclosing production to try its next alternative. What remains
/// are the failures of a whole parse, or of a value assembled by other means.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallNumberError {
    /// The input was empty or contained only whitespace.
    #[error("Empty call number")]
    Empty,

    /// The input does not start with the class letters of a caption.
    #[error("Missing class letters at offset {offset}")]
    MissingClass {
        /// Byte offset at which the class letters were expected.
        offset: usize,
    },

    /// The grammar matched a prefix of the input but characters remain.
    #[error("Unexpected trailing input at offset {offset}: '{remaining}'")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        offset: usize,
        /// The unconsumed text.
        remaining: String,
    },

    /// A single call number component could not be parsed from a string.
    #[error("Invalid {component}: '{value}'")]
    InvalidComponent {
        /// Name of the component kind (for example `"date"` or `"cutter"`).
        component: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An assembled call number violates a structural invariant.
    #[error("Invalid call number structure: {0}")]
    InvalidStructure(String),
}

/// Convenience type alias for [`std::result::Result`] with [`CallNumberError`].
pub type Result<T> = std::result::Result<T, CallNumberError>;
