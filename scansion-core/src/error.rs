//! Error types for scansion-core
//!
//! Only construction and loading can fail. A text that does not scan is a
//! normal outcome and is reported through `Option` or [`crate::Mismatch`].

use thiserror::Error;

/// Invalid syllable pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern has no elements
    #[error("pattern must contain at least one element")]
    Empty,

    /// An element is zero
    #[error("pattern element {position} must be positive")]
    ZeroElement {
        /// Zero-based position of the offending element
        position: usize,
    },

    /// An element could not be parsed as a positive integer
    #[error("invalid pattern element '{0}'")]
    InvalidElement(String),
}

/// Crate-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid pattern
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    /// I/O failure while reading a dictionary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dictionary line
    #[error("malformed dictionary entry on line {line}: {reason}")]
    Dictionary {
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// No verse form with the requested name
    #[error("unknown verse form '{0}'")]
    UnknownForm(String),

    /// The embedded verse form table failed to load
    #[error("verse form table: {0}")]
    FormTable(String),
}

/// Result type for scansion-core operations
pub type Result<T> = std::result::Result<T, Error>;
