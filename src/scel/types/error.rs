//! Custom error types for the scel-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A length-prefixed or fixed-width field ended before its declared size.
    #[error("Truncated {context}: expected {expected} bytes, but only {found} were available")]
    Truncated {
        context: &'static str,
        expected: u64,
        found: u64,
    },

    /// The file is structurally invalid or does not look like a cell dictionary.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The input discovery pattern could not be built or walked.
    #[error("Input discovery failed: {0}")]
    Glob(String),
}

impl ScelError {
    /// Returns `true` when the error means the byte source simply ran out.
    ///
    /// The word list has no terminator of its own, so running out of bytes
    /// while walking it is how a short file ends.
    pub fn is_end_of_data(&self) -> bool {
        match self {
            ScelError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            ScelError::Truncated { .. } => true,
            _ => false,
        }
    }
}

impl From<glob::PatternError> for ScelError {
    fn from(e: glob::PatternError) -> Self {
        ScelError::Glob(e.to_string())
    }
}

impl From<glob::GlobError> for ScelError {
    fn from(e: glob::GlobError) -> Self {
        ScelError::Glob(e.to_string())
    }
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
