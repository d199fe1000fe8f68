//! Error types for STL reading and writing.

use thiserror::Error;

/// Result type for STL operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while reading or writing STL.
#[derive(Debug, Error)]
pub enum StlError {
    /// The input could not be classified as either encoding.
    #[error("format error: {0}")]
    Format(String),

    /// The input was classified but does not follow the encoding.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The writer was handed something STL cannot represent.
    #[error("unsupported data: {0}")]
    UnsupportedData(String),

    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StlError {
    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedData(message.into())
    }
}

/// A grammar violation or short read, always with a position in the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line did not have the expected form.
    #[error("line {line}: expected {expected}, found {text:?}")]
    Syntax {
        line: usize,
        text: String,
        expected: &'static str,
    },

    /// A coordinate on a `facet normal` or `vertex` line is not a number.
    #[error("line {line}: invalid number in {text:?}")]
    InvalidNumber { line: usize, text: String },

    /// A line is not valid UTF-8.
    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 { line: usize },

    /// The text ended in the middle of a solid.
    #[error("line {line}: unexpected end of file, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// A binary file is shorter than its header and triangle count require.
    #[error("truncated binary STL: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },
}
