//! Dictionary provider seam
//!
//! Word lists are plain data behind a trait so embedders can swap the
//! bundled lists for their own source (a moderation database, a tenant
//! config) without touching the engine.

use crate::languages;

/// Supplies per-language word lists to the engine
pub trait DictionaryProvider: Send + Sync {
    /// The word list for a language key, or None when unknown
    fn words(&self, language: &str) -> Option<Vec<String>>;

    /// Every language key this provider can supply
    fn languages(&self) -> Vec<String>;
}

/// The bundled eight-language dictionary set
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDictionaries;

impl DictionaryProvider for BuiltinDictionaries {
    fn words(&self, language: &str) -> Option<Vec<String>> {
        languages::words(language).map(|words| words.iter().map(|w| w.to_string()).collect())
    }

    fn languages(&self) -> Vec<String> {
        languages::AVAILABLE.iter().map(|l| l.to_string()).collect()
    }
}
