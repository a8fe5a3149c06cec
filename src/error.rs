//! Error types for `spamtree`.
use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the tree, the feature vectors and the readers.
#[derive(Error, Debug)]
pub enum Error {
    /// A required value is absent or the given sequences are inconsistent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The line-oriented tree dump violates its format.
    #[error("Malformed tree at line {line}: {reason}")]
    MalformedTree {
        /// 1-based line number where the violation was detected.
        line: usize,
        /// What went wrong.
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error reported by `polars`.
    #[error("CSV error: {0}")]
    Polars(#[from] PolarsError),
}

impl Error {
    #[inline]
    pub(crate) fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    #[inline]
    pub(crate) fn malformed<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::MalformedTree { line, reason: reason.into() }
    }
}
