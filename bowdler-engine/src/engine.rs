//! The profanity engine
//!
//! Owns the dictionary, whitelist and configuration, and runs the per-call
//! pipeline: normalize, scan (trie or automaton, optionally pre-screened
//! by the Bloom filter), boundary filter, whitelist filter, optional
//! context filter, deduplicate, score, render.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use bowdler_core::charclass::{is_strict_boundary, is_word_char};
use bowdler_core::{
    AhoCorasickAutomaton, BloomFilter, ContextAnalyzer, LeetNormalizer, NormalizedText, WordTrie,
};
use tracing::{debug, info, warn};

use crate::config::{ConfigPatch, EngineConfig};
use crate::dictionary::{BuiltinDictionaries, DictionaryProvider};
use crate::error::Result;
use crate::languages;
use crate::reconciler::{self, MatchCandidate};
use crate::result::{DetectionResult, MatchPosition};

/// Conventional token for whole-word redaction
pub const DEFAULT_WORD_PLACEHOLDER: &str = "***";

/// Target false-positive rate for the pre-screen filter
const BLOOM_FP_RATE: f64 = 0.01;

/// Lazily rebuilt matcher snapshot, keyed by the dictionary version
struct VersionedCache<T> {
    value: Option<Arc<T>>,
    version: u64,
}

impl<T> VersionedCache<T> {
    fn empty() -> Self {
        Self {
            value: None,
            version: 0,
        }
    }
}

/// Detects, scores and redacts profanity in multilingual text
///
/// Construct with [`ProfanityEngine::new`] (bundled english + hindi lists),
/// [`ProfanityEngine::with_config`], or [`ProfanityEngine::builder`]. All
/// scanning takes `&self`; dictionary and configuration edits take
/// `&mut self`, so shared use across threads naturally serializes writers.
pub struct ProfanityEngine {
    config: EngineConfig,
    provider: Arc<dyn DictionaryProvider>,
    normalizer: LeetNormalizer,

    trie: WordTrie,
    /// Active set of canonical (normalized) words
    words: BTreeSet<String>,
    /// True when some active word contains a non-word char (a phrase or a
    /// symbol spelling); the token pre-screen cannot be trusted then
    has_non_token_words: bool,
    whitelist: HashSet<String>,
    /// Custom dictionaries registered at runtime, by lowercased name
    custom: HashMap<String, Vec<String>>,
    loaded: BTreeSet<String>,
    /// Words added via [`ProfanityEngine::add`], kept raw for rebuilds
    dynamic: BTreeSet<String>,

    context: Option<ContextAnalyzer>,

    /// Bumped on every dictionary mutation; snapshots rebuild when behind
    version: u64,
    automaton: Mutex<VersionedCache<AhoCorasickAutomaton>>,
    bloom: Mutex<VersionedCache<BloomFilter>>,
}

impl Default for ProfanityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityEngine {
    /// Engine with default configuration and the bundled english and hindi
    /// dictionaries loaded
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with the given configuration and the default dictionaries
    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self::bare(config, Arc::new(BuiltinDictionaries));
        engine.load_language("english");
        engine.load_language("hindi");
        engine
    }

    /// Builder for custom languages, dictionaries, whitelist and provider
    pub fn builder() -> ProfanityEngineBuilder {
        ProfanityEngineBuilder::new()
    }

    fn bare(config: EngineConfig, provider: Arc<dyn DictionaryProvider>) -> Self {
        let mut engine = Self {
            config,
            provider,
            normalizer: LeetNormalizer::new(),
            trie: WordTrie::new(),
            words: BTreeSet::new(),
            has_non_token_words: false,
            whitelist: HashSet::new(),
            custom: HashMap::new(),
            loaded: BTreeSet::new(),
            dynamic: BTreeSet::new(),
            context: None,
            version: 1,
            automaton: Mutex::new(VersionedCache::empty()),
            bloom: Mutex::new(VersionedCache::empty()),
        };
        engine.rebuild_context();
        engine
    }

    // ---- detection ----------------------------------------------------

    /// The canonical operation: every other check/clean call derives from
    /// this. Empty input yields a clean result.
    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.is_empty() || self.words.is_empty() {
            return DetectionResult::clean(text);
        }

        let original: Vec<char> = text.chars().collect();
        let byte_offsets = char_byte_offsets(text);

        let base = if self.config.case_sensitive {
            NormalizedText::identity(text)
        } else {
            NormalizedText::fold_case(text)
        };
        let mut views = vec![base];
        if self.config.enable_leet_speak {
            let leet = self.normalizer.normalize(&views[0]);
            if leet.chars() != views[0].chars() {
                views.push(leet);
            }
        }

        if self.prescreen_says_clean(&views) {
            return DetectionResult::clean(text);
        }

        let mut candidates = Vec::new();
        for view in &views {
            self.scan_view(view, &original, &mut candidates);
        }

        if let (Some(analyzer), Some(ctx)) = (&self.context, &self.config.context) {
            candidates.retain(|c| {
                let outcome = analyzer.analyze(text, c.start, c.end, &c.word);
                outcome.score >= ctx.threshold
            });
        }

        let kept = reconciler::deduplicate(candidates);
        let severity = reconciler::severity(&kept);
        let cleaned_text = redact_chars(&original, &kept, self.config.placeholder);

        let positions: Vec<MatchPosition> = kept
            .iter()
            .map(|c| MatchPosition {
                word: original[c.start..c.end].iter().collect(),
                start: c.start,
                end: c.end,
                byte_start: byte_offsets[c.start],
                byte_end: byte_offsets[c.end],
            })
            .collect();
        let detected_words = positions.iter().map(|p| p.word.clone()).collect();

        DetectionResult {
            has_profanity: !kept.is_empty(),
            detected_words,
            cleaned_text,
            severity,
            positions,
        }
    }

    /// `detect(text).has_profanity`
    pub fn check(&self, text: &str) -> bool {
        self.detect(text).has_profanity
    }

    /// Char-level redaction with the configured placeholder
    pub fn clean(&self, text: &str) -> String {
        self.detect(text).cleaned_text
    }

    /// Char-level redaction with an explicit placeholder char
    pub fn clean_with(&self, text: &str, placeholder: char) -> String {
        let result = self.detect(text);
        if result.positions.is_empty() {
            return result.cleaned_text;
        }
        let original: Vec<char> = text.chars().collect();
        redact_chars(&original, &positions_to_candidates(&result.positions), placeholder)
    }

    /// Whole-word redaction: each kept span becomes one `token`
    pub fn clean_with_placeholder(&self, text: &str, token: &str) -> String {
        let result = self.detect(text);
        if result.positions.is_empty() {
            return result.cleaned_text;
        }
        let original: Vec<char> = text.chars().collect();
        redact_words(&original, &positions_to_candidates(&result.positions), token)
    }

    fn prescreen_says_clean(&self, views: &[NormalizedText]) -> bool {
        if !self.config.use_bloom_prefilter
            || self.config.detect_partial_words
            || self.has_non_token_words
        {
            return false;
        }
        let Some(bloom) = self.bloom_snapshot() else {
            return false;
        };
        // Whole-word matches are exactly full tokens, so a token-level
        // miss across every view proves the full scan would find nothing.
        !views.iter().any(|view| {
            word_tokens(view.chars())
                .iter()
                .any(|token| bloom.might_contain(token))
        })
    }

    fn scan_view(
        &self,
        view: &NormalizedText,
        original: &[char],
        out: &mut Vec<MatchCandidate>,
    ) {
        let chars = view.chars();
        let mut raw: Vec<(String, usize, usize)> = Vec::new();

        if self.config.use_automaton {
            let automaton = self.automaton_snapshot();
            for m in automaton.find_all(chars) {
                raw.push((m.pattern.to_string(), m.start, m.end));
            }
        } else {
            for pos in 0..chars.len() {
                for m in self.trie.matches_at(chars, pos) {
                    raw.push((m.word.to_string(), m.start, m.end));
                }
            }
        }

        for (word, view_start, view_end) in raw {
            let (start, end) = view.source_span(view_start, view_end);

            if !self.config.detect_partial_words && !whole_word(original, start, end) {
                continue;
            }
            if self.config.strict_mode && !strict_boundaries(original, start, end) {
                continue;
            }

            let literal: String = original[start..end].iter().collect();
            if self.is_whitelisted(&word, &literal) {
                continue;
            }

            out.push(MatchCandidate { word, start, end });
        }
    }

    fn automaton_snapshot(&self) -> Arc<AhoCorasickAutomaton> {
        let mut cache = self
            .automaton
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = &cache.value {
            if cache.version == self.version {
                return Arc::clone(value);
            }
        }
        debug!(words = self.words.len(), "rebuilding automaton snapshot");
        let built = Arc::new(AhoCorasickAutomaton::new(self.words.iter().cloned()));
        cache.value = Some(Arc::clone(&built));
        cache.version = self.version;
        built
    }

    fn bloom_snapshot(&self) -> Option<Arc<BloomFilter>> {
        if self.words.is_empty() {
            return None;
        }
        let mut cache = self.bloom.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = &cache.value {
            if cache.version == self.version {
                return Some(Arc::clone(value));
            }
        }
        debug!(words = self.words.len(), "rebuilding bloom snapshot");
        let mut filter = BloomFilter::new(self.words.len(), BLOOM_FP_RATE);
        filter.add_all(self.words.iter().map(|w| w.as_str()));
        let built = Arc::new(filter);
        cache.value = Some(Arc::clone(&built));
        cache.version = self.version;
        Some(built)
    }

    // ---- dictionary edits ---------------------------------------------

    /// Add words to the active set. Blank items are skipped with a
    /// warning; the rest of the batch still applies.
    pub fn add<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let raw = word.as_ref().trim();
            if raw.is_empty() {
                warn!("skipping blank word in add batch");
                continue;
            }
            self.dynamic.insert(raw.to_string());
            self.insert_word(raw);
        }
    }

    /// Remove words from the active set
    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let raw = word.as_ref().trim();
            if raw.is_empty() {
                warn!("skipping blank word in remove batch");
                continue;
            }
            let normalized = self.normalize_word(raw);
            if self.trie.remove(&normalized) {
                self.words.remove(&normalized);
                self.version += 1;
            }
            self.dynamic.remove(raw);
        }
        self.has_non_token_words = self
            .words
            .iter()
            .any(|w| !w.chars().all(is_word_char));
    }

    /// Words that must never be reported, checked against both the
    /// dictionary word and the literal matched substring
    pub fn add_to_whitelist<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let raw = word.as_ref().trim();
            if raw.is_empty() {
                warn!("skipping blank word in whitelist batch");
                continue;
            }
            let normalized = self.normalize_word(raw);
            self.whitelist.insert(normalized);
        }
    }

    /// Undo [`ProfanityEngine::add_to_whitelist`]
    pub fn remove_from_whitelist<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let normalized = self.normalize_word(word.as_ref().trim());
            self.whitelist.remove(&normalized);
        }
    }

    /// Load a dictionary by language key. Unknown or empty dictionaries
    /// log a warning and return false; they are expected in normal use.
    pub fn load_language(&mut self, language: &str) -> bool {
        let key = language.trim().to_lowercase();
        if key.is_empty() {
            warn!("invalid language key");
            return false;
        }
        if self.loaded.contains(&key) {
            return true;
        }

        let words = self
            .custom
            .get(&key)
            .cloned()
            .or_else(|| self.provider.words(&key));
        let Some(words) = words.filter(|w| !w.is_empty()) else {
            warn!(language = %key, "dictionary not found or empty");
            return false;
        };

        let mut added = 0;
        for word in &words {
            if self.insert_word(word) {
                added += 1;
            }
        }
        self.loaded.insert(key.clone());
        self.rebuild_context();
        info!(language = %key, added, "loaded dictionary");
        true
    }

    /// Load several languages; returns how many succeeded
    pub fn load_languages<I, S>(&mut self, languages: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        languages
            .into_iter()
            .filter(|l| self.load_language(l.as_ref()))
            .count()
    }

    /// Load the bundled hindi, bengali, tamil and telugu lists
    pub fn load_indian_languages(&mut self) -> usize {
        self.load_languages(["hindi", "bengali", "tamil", "telugu"])
    }

    /// Register and load a caller-supplied dictionary under `name`;
    /// returns how many words entered the active set
    pub fn load_custom_dictionary<I, S>(&mut self, name: &str, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            warn!("invalid custom dictionary name");
            return 0;
        }

        let valid: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let raw = w.as_ref().trim();
                if raw.is_empty() {
                    warn!(dictionary = %key, "skipping blank word in custom dictionary");
                    None
                } else {
                    Some(raw.to_string())
                }
            })
            .collect();
        if valid.is_empty() {
            warn!(dictionary = %key, "custom dictionary contains no valid words");
            return 0;
        }

        let mut added = 0;
        for word in &valid {
            if self.insert_word(word) {
                added += 1;
            }
        }
        self.custom.insert(key.clone(), valid);
        self.loaded.insert(key.clone());
        info!(dictionary = %key, added, "loaded custom dictionary");
        added
    }

    /// Drop every loaded dictionary and dynamic word. The whitelist and
    /// registered custom dictionaries survive.
    pub fn clear_list(&mut self) {
        self.trie.clear();
        self.words.clear();
        self.loaded.clear();
        self.dynamic.clear();
        self.has_non_token_words = false;
        self.version += 1;
    }

    // ---- configuration ------------------------------------------------

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the char-level redaction placeholder
    pub fn set_placeholder(&mut self, placeholder: char) {
        self.config.placeholder = placeholder;
    }

    /// Set the placeholder from a string; empty is a configuration error
    pub fn set_placeholder_str(&mut self, placeholder: &str) -> Result<()> {
        self.config.placeholder = EngineConfig::placeholder_from_str(placeholder)?;
        Ok(())
    }

    /// Apply a partial configuration update. Changing case sensitivity
    /// renormalizes and rebuilds the whole dictionary.
    pub fn update_config(&mut self, patch: ConfigPatch) {
        if let Some(placeholder) = patch.placeholder {
            self.config.placeholder = placeholder;
        }
        if let Some(enable) = patch.enable_leet_speak {
            self.config.enable_leet_speak = enable;
        }
        if let Some(strict) = patch.strict_mode {
            self.config.strict_mode = strict;
        }
        if let Some(partial) = patch.detect_partial_words {
            self.config.detect_partial_words = partial;
        }
        if let Some(automaton) = patch.use_automaton {
            self.config.use_automaton = automaton;
        }
        if let Some(bloom) = patch.use_bloom_prefilter {
            self.config.use_bloom_prefilter = bloom;
        }
        if let Some(context) = patch.context {
            self.config.context = context;
            self.rebuild_context();
        }
        if let Some(case_sensitive) = patch.case_sensitive {
            if case_sensitive != self.config.case_sensitive {
                self.config.case_sensitive = case_sensitive;
                self.rebuild_index();
            }
        }
    }

    // ---- introspection ------------------------------------------------

    /// The active canonical word set, sorted
    pub fn words(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Language keys currently loaded
    pub fn loaded_languages(&self) -> Vec<String> {
        self.loaded.iter().cloned().collect()
    }

    /// Language keys the provider and custom registrations can supply
    pub fn available_languages(&self) -> Vec<String> {
        let mut available = self.provider.languages();
        for key in self.custom.keys() {
            if !available.contains(key) {
                available.push(key.clone());
            }
        }
        available.sort();
        available
    }

    // ---- internals ----------------------------------------------------

    fn normalize_word(&self, word: &str) -> String {
        let trimmed = word.trim();
        if self.config.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }

    fn insert_word(&mut self, word: &str) -> bool {
        let normalized = self.normalize_word(word);
        if normalized.is_empty() || self.whitelist.contains(&normalized) {
            return false;
        }
        if !self.words.insert(normalized.clone()) {
            return false;
        }
        if !normalized.chars().all(is_word_char) {
            self.has_non_token_words = true;
        }
        self.trie.insert(&normalized);
        self.version += 1;
        true
    }

    fn is_whitelisted(&self, word: &str, literal: &str) -> bool {
        if self.config.case_sensitive {
            self.whitelist.contains(word) || self.whitelist.contains(literal)
        } else {
            self.whitelist.contains(&word.to_lowercase())
                || self.whitelist.contains(&literal.to_lowercase())
        }
    }

    /// Renormalize and rebuild the trie from loaded dictionaries and
    /// dynamic words; invalidates the automaton and Bloom snapshots.
    fn rebuild_index(&mut self) {
        debug!(languages = self.loaded.len(), "rebuilding dictionary index");
        self.trie.clear();
        self.words.clear();
        self.has_non_token_words = false;
        self.version += 1;

        let loaded: Vec<String> = self.loaded.iter().cloned().collect();
        for language in loaded {
            let words = self
                .custom
                .get(&language)
                .cloned()
                .or_else(|| self.provider.words(&language))
                .unwrap_or_default();
            for word in &words {
                self.insert_word(word);
            }
        }
        let dynamic: Vec<String> = self.dynamic.iter().cloned().collect();
        for word in dynamic {
            self.insert_word(&word);
        }
    }

    fn rebuild_context(&mut self) {
        self.context = self.config.context.map(|ctx| {
            let codes: Vec<&str> = self
                .loaded
                .iter()
                .filter_map(|l| languages::short_code(l))
                .collect();
            let mut analyzer = ContextAnalyzer::new(codes);
            analyzer.set_window(ctx.window);
            analyzer
        });
    }
}

/// Builder mirroring the engine's construction-time options
pub struct ProfanityEngineBuilder {
    config: EngineConfig,
    placeholder_str: Option<String>,
    languages: Vec<String>,
    custom_dictionaries: Vec<(String, Vec<String>)>,
    whitelist: Vec<String>,
    provider: Option<Arc<dyn DictionaryProvider>>,
    default_languages: bool,
}

impl Default for ProfanityEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityEngineBuilder {
    /// Builder with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            placeholder_str: None,
            languages: Vec::new(),
            custom_dictionaries: Vec::new(),
            whitelist: Vec::new(),
            provider: None,
            default_languages: true,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Redaction placeholder char
    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.config.placeholder = placeholder;
        self
    }

    /// Redaction placeholder from a string; validated at build time
    pub fn placeholder_str<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder_str = Some(placeholder.into());
        self
    }

    /// Toggle the leet-speak scan pass
    pub fn leet_speak(mut self, enable: bool) -> Self {
        self.config.enable_leet_speak = enable;
        self
    }

    /// Toggle case-sensitive matching
    pub fn case_sensitive(mut self, enable: bool) -> Self {
        self.config.case_sensitive = enable;
        self
    }

    /// Toggle strict boundary classes
    pub fn strict_mode(mut self, enable: bool) -> Self {
        self.config.strict_mode = enable;
        self
    }

    /// Toggle partial-word matching
    pub fn detect_partial_words(mut self, enable: bool) -> Self {
        self.config.detect_partial_words = enable;
        self
    }

    /// Scan with the Aho-Corasick automaton
    pub fn use_automaton(mut self, enable: bool) -> Self {
        self.config.use_automaton = enable;
        self
    }

    /// Pre-screen texts through the Bloom filter
    pub fn use_bloom_prefilter(mut self, enable: bool) -> Self {
        self.config.use_bloom_prefilter = enable;
        self
    }

    /// Enable context-aware false-positive reduction
    pub fn context(mut self, context: crate::config::ContextConfig) -> Self {
        self.config.context = Some(context);
        self
    }

    /// Load an extra language at build time
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Load several extra languages at build time
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    /// Register and load a custom dictionary at build time
    pub fn custom_dictionary<S, I, W>(mut self, name: S, words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.custom_dictionaries
            .push((name.into(), words.into_iter().map(Into::into).collect()));
        self
    }

    /// Seed the whitelist
    pub fn whitelist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist.extend(words.into_iter().map(Into::into));
        self
    }

    /// Swap the dictionary provider
    pub fn provider(mut self, provider: Arc<dyn DictionaryProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Skip loading the default english and hindi dictionaries
    pub fn without_default_languages(mut self) -> Self {
        self.default_languages = false;
        self
    }

    /// Build the engine; fails on an empty placeholder string
    pub fn build(self) -> Result<ProfanityEngine> {
        let mut config = self.config;
        if let Some(placeholder) = &self.placeholder_str {
            config.placeholder = EngineConfig::placeholder_from_str(placeholder)?;
        }

        let provider = self
            .provider
            .unwrap_or_else(|| Arc::new(BuiltinDictionaries));
        let mut engine = ProfanityEngine::bare(config, provider);

        // Whitelist first so whitelisted words never enter the trie
        engine.add_to_whitelist(&self.whitelist);
        if self.default_languages {
            engine.load_language("english");
            engine.load_language("hindi");
        }
        for language in &self.languages {
            engine.load_language(language);
        }
        for (name, words) in &self.custom_dictionaries {
            engine.load_custom_dictionary(name, words);
        }
        Ok(engine)
    }
}

// ---- free helpers ------------------------------------------------------

/// Byte offset of every char plus the end-of-text offset
fn char_byte_offsets(text: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    offsets
}

/// Whole-word policy: the chars adjacent to the span are non-word or edges
fn whole_word(original: &[char], start: usize, end: usize) -> bool {
    let left_ok = start == 0 || !is_word_char(original[start - 1]);
    let right_ok = end == original.len() || !is_word_char(original[end]);
    left_ok && right_ok
}

/// Strict policy: adjacent chars must be whitespace/punctuation/symbol
fn strict_boundaries(original: &[char], start: usize, end: usize) -> bool {
    let left_ok = start == 0 || is_strict_boundary(original[start - 1]);
    let right_ok = end == original.len() || is_strict_boundary(original[end]);
    left_ok && right_ok
}

fn word_tokens(chars: &[char]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for &ch in chars {
        if is_word_char(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn positions_to_candidates(positions: &[MatchPosition]) -> Vec<MatchCandidate> {
    positions
        .iter()
        .map(|p| MatchCandidate {
            word: p.word.clone(),
            start: p.start,
            end: p.end,
        })
        .collect()
}

/// Replace every matched char with the placeholder. Spans are processed
/// right to left so earlier offsets stay valid.
fn redact_chars(original: &[char], matches: &[MatchCandidate], placeholder: char) -> String {
    let mut out = original.to_vec();
    for m in matches.iter().rev() {
        for slot in &mut out[m.start..m.end] {
            *slot = placeholder;
        }
    }
    out.into_iter().collect()
}

/// Replace every matched span with one token, right to left
fn redact_words(original: &[char], matches: &[MatchCandidate], token: &str) -> String {
    let mut out = original.to_vec();
    for m in matches.iter().rev() {
        out.splice(m.start..m.end, token.chars());
    }
    out.into_iter().collect()
}
