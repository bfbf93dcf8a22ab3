//! Multilingual profanity detection, scoring and redaction
//!
//! The [`ProfanityEngine`] owns the dictionary, whitelist and
//! configuration, and combines the matchers from `bowdler-core` into one
//! decision per call: spans, severity, and a redacted rendering.
//!
//! ```
//! use bowdler_engine::ProfanityEngine;
//!
//! let engine = ProfanityEngine::new();
//! let result = engine.detect("This is bullshit.");
//! assert!(result.has_profanity);
//! assert_eq!(result.cleaned_text, "This is ********.");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod languages;
mod reconciler;
pub mod result;

pub use config::{ConfigPatch, ContextConfig, EngineConfig, DEFAULT_PLACEHOLDER};
pub use dictionary::{BuiltinDictionaries, DictionaryProvider};
pub use engine::{ProfanityEngine, ProfanityEngineBuilder, DEFAULT_WORD_PLACEHOLDER};
pub use error::{EngineError, Result};
pub use result::{DetectionResult, MatchPosition, Severity};

// Re-export the scoring types callers see through detect-adjacent APIs
pub use bowdler_core::{Confidence, ContextAnalyzer, ContextOutcome};
