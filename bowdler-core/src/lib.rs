//! Matching algorithms for multilingual profanity detection
//!
//! This crate provides the building blocks the engine layer composes:
//! a word trie, an Aho-Corasick automaton, a Bloom-filter pre-screen,
//! leet-speak normalization, and context-aware match scoring. None of
//! these types hold engine policy (word boundaries, whitelists,
//! severity); they report raw spans and let the caller decide.

#![warn(missing_docs)]

pub mod automaton;
pub mod bloom;
pub mod charclass;
pub mod context;
pub mod error;
pub mod normalizer;
pub mod trie;

pub use automaton::{AhoCorasickAutomaton, AutomatonMatch, AutomatonStats};
pub use bloom::{BloomFilter, BloomStats};
pub use context::{Confidence, ContextAnalyzer, ContextOutcome, RuleAction, RuleKind};
pub use error::{CoreError, Result};
pub use normalizer::{LeetNormalizer, NormalizedText};
pub use trie::{TrieMatch, WordTrie};
