//! Engine error types
//!
//! Deliberately small: unknown language keys and malformed batch items are
//! expected in normal use, so `load_language` and the batch edits log a
//! warning and degrade instead of erroring. Only genuinely unusable
//! configuration surfaces here.

use bowdler_core::CoreError;
use thiserror::Error;

/// Errors from engine configuration and dictionary plumbing
#[derive(Error, Debug)]
pub enum EngineError {
    /// The placeholder string was empty
    #[error("placeholder must not be empty")]
    InvalidPlaceholder,

    /// A core algorithm rejected its input
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
