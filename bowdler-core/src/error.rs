//! Core error types

use thiserror::Error;

/// Errors from the core matching algorithms
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bloom filters of different geometry cannot be combined
    #[error("bloom filter shape mismatch: {left_bits}x{left_hashes} vs {right_bits}x{right_hashes}")]
    ShapeMismatch {
        /// Bit count of the left-hand filter
        left_bits: usize,
        /// Hash count of the left-hand filter
        left_hashes: u32,
        /// Bit count of the right-hand filter
        right_bits: usize,
        /// Hash count of the right-hand filter
        right_hashes: u32,
    },

    /// A custom context rule template failed to compile
    #[error("invalid context pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
