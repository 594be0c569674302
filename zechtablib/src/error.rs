//! Error types for zechtablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, laying out, or generating tables
#[derive(Error, Debug)]
pub enum ZechtabError {
    /// A table line without the `->` separator
    #[error("line {line}: expected `key -> value`, got '{content}'")]
    MalformedLine { line: usize, content: String },

    /// A key or value that is neither a number nor `Infinity`
    #[error("line {line}: invalid key '{token}'")]
    InvalidKey { line: usize, token: String },

    /// The same key listed twice
    #[error("line {line}: duplicate key '{key}'")]
    DuplicateKey { key: String, line: usize },

    /// Failed to read a table file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stride of zero or above the row limit
    #[error("stride must be between 1 and {max}, got {0}", max = crate::layout::MAX_STRIDE)]
    InvalidStride(usize),

    /// Field characteristic is not a prime
    #[error("{0} is not a prime")]
    NotPrime(u64),

    /// Field order exceeds the supported limit
    #[error("field of order {order} exceeds the limit of {limit} elements")]
    FieldTooLarge { order: u64, limit: u64 },

    /// Modulus polynomial is unusable (empty, constant, or zero leading coefficient)
    #[error("invalid modulus polynomial: {0}")]
    InvalidModulus(String),

    /// Modulus polynomial does not yield a field
    #[error("modulus {0} is reducible over the prime field")]
    ReducibleModulus(String),

    /// Element digits do not fit the field
    #[error("invalid element digits: {0}")]
    InvalidDigits(String),

    /// Layout configuration could not be parsed
    #[error("invalid layout config: {0}")]
    Config(String),
}
