//! Error types for the Fixbits crate.
//!
//! Bit operations on [`UintN`](crate::UintN) are infallible on their hot path.
//! This module provides the error type for the checked entry points
//! (`try_*` bit access, runtime-sized construction, `bitvec` interop and
//! serialization), using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Fixbits operations.
#[derive(Error, Debug)]
pub enum FixbitsError {
    /// Bit position outside of the logical width
    #[error("Bit index out of bounds: index {index}, width {width}")]
    IndexOutOfBounds {
        /// The bit position that was accessed
        index: usize,
        /// The logical width in bits
        width: usize,
    },

    /// Word count does not match the storage layout
    #[error("Invalid word count: expected {expected}, got {actual}")]
    InvalidWordCount {
        /// Number of words in the storage
        expected: usize,
        /// Number of words supplied
        actual: usize,
    },

    /// Bit length does not match the logical width
    #[error("Invalid bit length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Logical width in bits
        expected: usize,
        /// Number of bits supplied
        actual: usize,
    },

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization error occurred
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Fixbits operations.
pub type Result<T> = std::result::Result<T, FixbitsError>;
