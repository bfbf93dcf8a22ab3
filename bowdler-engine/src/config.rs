//! Engine configuration

use serde::Serialize;

use crate::error::{EngineError, Result};

/// Default char-level redaction placeholder
pub const DEFAULT_PLACEHOLDER: char = '*';

/// Context-analysis settings; present means enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContextConfig {
    /// Matches scoring below this are suppressed
    pub threshold: f64,
    /// Window radius in chars each side of a match
    pub window: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            window: bowdler_core::context::DEFAULT_WINDOW,
        }
    }
}

/// Everything that steers a [`crate::ProfanityEngine`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    /// Char repeated over redacted spans by `clean`
    pub placeholder: char,
    /// Run the leet-normalized second scan pass
    pub enable_leet_speak: bool,
    /// Skip case folding; changing this rebuilds the dictionary
    pub case_sensitive: bool,
    /// Require whitespace/punctuation/symbol neighbors, not merely
    /// non-word ones; composes with whole-word matching
    pub strict_mode: bool,
    /// Accept substring matches without boundary checks
    pub detect_partial_words: bool,
    /// Scan with the Aho-Corasick automaton instead of per-position trie
    /// walks
    pub use_automaton: bool,
    /// Token-screen texts through the Bloom filter before scanning
    pub use_bloom_prefilter: bool,
    /// Context-aware false-positive reduction; None disables it
    pub context: Option<ContextConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            enable_leet_speak: true,
            case_sensitive: false,
            strict_mode: false,
            detect_partial_words: false,
            use_automaton: false,
            use_bloom_prefilter: false,
            context: None,
        }
    }
}

impl EngineConfig {
    /// First char of a user-supplied placeholder string; an empty string
    /// is a configuration error.
    pub fn placeholder_from_str(placeholder: &str) -> Result<char> {
        placeholder
            .chars()
            .next()
            .ok_or(EngineError::InvalidPlaceholder)
    }
}

/// Partial update for [`crate::ProfanityEngine::update_config`]; only set
/// fields change.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    /// New redaction placeholder
    pub placeholder: Option<char>,
    /// Toggle the leet scan pass
    pub enable_leet_speak: Option<bool>,
    /// Toggle case sensitivity; a change rebuilds the dictionary
    pub case_sensitive: Option<bool>,
    /// Toggle strict boundaries
    pub strict_mode: Option<bool>,
    /// Toggle partial-word matching
    pub detect_partial_words: Option<bool>,
    /// Toggle the automaton scanner
    pub use_automaton: Option<bool>,
    /// Toggle the Bloom pre-screen
    pub use_bloom_prefilter: Option<bool>,
    /// Enable (Some(Some)), reconfigure, or disable (Some(None)) context
    /// analysis
    pub context: Option<Option<ContextConfig>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_behavior() {
        let config = EngineConfig::default();
        assert_eq!(config.placeholder, '*');
        assert!(config.enable_leet_speak);
        assert!(!config.case_sensitive);
        assert!(!config.strict_mode);
        assert!(!config.detect_partial_words);
        assert!(config.context.is_none());
    }

    #[test]
    fn placeholder_from_str_takes_first_char() {
        assert_eq!(EngineConfig::placeholder_from_str("#!").unwrap(), '#');
        assert!(matches!(
            EngineConfig::placeholder_from_str(""),
            Err(EngineError::InvalidPlaceholder)
        ));
    }

    #[test]
    fn context_defaults() {
        let ctx = ContextConfig::default();
        assert!((ctx.threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(ctx.window, 50);
    }
}
