//! Context-aware false-positive scoring
//!
//! A candidate match is scored against contextual rules (negation,
//! possessive, article, compound, proper-noun, quotation, medical,
//! anatomical, plus per-language variants) evaluated over a window of text
//! around the match. Rules are precompiled templates with a `__WORD__`
//! slot; the compiled per-word rule set is memoized on first use, so
//! repeated candidates never rebuild a regex.

pub mod patterns;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use regex::Regex;

use crate::error::Result;
pub use patterns::{RuleKind, RuleTemplate, ANY_LANGUAGE, UNIVERSAL_TEMPLATES};

/// Slot in a rule template replaced by the escaped candidate word
pub const WORD_SLOT: &str = "__WORD__";

/// What a matching rule does to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Multiply the score by the rule weight
    Reduce,
    /// Multiply the score by `2 - weight`
    Increase,
    /// Zero the score and stop evaluating
    Whitelist,
}

/// How sure the analyzer is that a surviving match is real profanity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// No context rule fired
    High,
    /// One or two rules fired
    Medium,
    /// Three or more rules fired; likely a false positive
    Low,
}

/// One rule's evaluation record
#[derive(Debug, Clone)]
pub struct AppliedRule {
    /// Rule category
    pub kind: RuleKind,
    /// The rule's weight
    pub weight: f64,
    /// Whether it matched the context window
    pub matched: bool,
}

/// Result of scoring one candidate
#[derive(Debug, Clone)]
pub struct ContextOutcome {
    /// Profanity likelihood in `[0, 1]`; callers suppress below threshold
    pub score: f64,
    /// Derived from how many rules fired
    pub confidence: Confidence,
    /// Every evaluated rule, in priority order
    pub applied_rules: Vec<AppliedRule>,
    /// The text window the rules ran against
    pub context: String,
}

#[derive(Debug)]
struct CompiledRule {
    kind: RuleKind,
    action: RuleAction,
    weight: f64,
    regex: Regex,
}

#[derive(Debug, Clone)]
struct CustomTemplate {
    kind: RuleKind,
    template: String,
    weight: f64,
    action: RuleAction,
    case_insensitive: bool,
}

/// Default context window radius in chars
pub const DEFAULT_WINDOW: usize = 50;
const MIN_WINDOW: usize = 10;
const MAX_WINDOW: usize = 200;

/// The original rule tables derive action from weight: strong reducers
/// stay reducers, only near-neutral weights above 0.8 push the score up.
fn action_for_weight(weight: f64) -> RuleAction {
    if weight > 0.8 {
        RuleAction::Increase
    } else {
        RuleAction::Reduce
    }
}

/// Scores candidate matches against contextual rules
#[derive(Debug)]
pub struct ContextAnalyzer {
    languages: Vec<String>,
    window: usize,
    custom: Vec<CustomTemplate>,
    /// word -> compiled, priority-sorted rule set
    cache: Mutex<HashMap<String, Arc<Vec<CompiledRule>>>>,
}

impl ContextAnalyzer {
    /// Analyzer with universal rules plus the per-language rule sets for
    /// the given language codes
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            window: DEFAULT_WINDOW,
            custom: Vec::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Set the window radius, clamped to `[10, 200]` chars per side
    pub fn set_window(&mut self, radius: usize) {
        self.window = radius.clamp(MIN_WINDOW, MAX_WINDOW);
    }

    /// Current window radius
    pub fn window(&self) -> usize {
        self.window
    }

    /// Register an additional rule template. The template must hold a
    /// `__WORD__` slot and compile once the slot is substituted.
    pub fn add_custom_rule(
        &mut self,
        kind: RuleKind,
        template: &str,
        weight: f64,
        action: RuleAction,
    ) -> Result<()> {
        // Validate with a dummy substitution so bad templates fail here,
        // not silently at scoring time.
        Regex::new(&template.replace(WORD_SLOT, "word"))?;
        self.custom.push(CustomTemplate {
            kind,
            template: template.to_string(),
            weight,
            action,
            case_insensitive: true,
        });
        self.lock_cache().clear();
        Ok(())
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Vec<CompiledRule>>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn applies(&self, languages: &[&str]) -> bool {
        languages.contains(&ANY_LANGUAGE)
            || self.languages.iter().any(|l| languages.contains(&l.as_str()))
    }

    fn rules_for(&self, word: &str) -> Arc<Vec<CompiledRule>> {
        if let Some(rules) = self.lock_cache().get(word) {
            return Arc::clone(rules);
        }

        let escaped = regex::escape(word);
        let mut rules: Vec<CompiledRule> = Vec::new();

        let universal = UNIVERSAL_TEMPLATES.iter().filter(|t| self.applies(t.languages));
        let per_language = self
            .languages
            .iter()
            .flat_map(|l| patterns::language_templates(l))
            .filter(|t| self.applies(t.languages));

        for template in universal.chain(per_language) {
            let mut source = template.template.replace(WORD_SLOT, &escaped);
            if template.case_insensitive {
                source = format!("(?i){source}");
            }
            // A template that stops compiling is dropped rather than
            // poisoning every lookup.
            if let Ok(regex) = Regex::new(&source) {
                rules.push(CompiledRule {
                    kind: template.kind,
                    action: action_for_weight(template.weight),
                    weight: template.weight,
                    regex,
                });
            }
        }

        for custom in &self.custom {
            let mut source = custom.template.replace(WORD_SLOT, &escaped);
            if custom.case_insensitive {
                source = format!("(?i){source}");
            }
            if let Ok(regex) = Regex::new(&source) {
                rules.push(CompiledRule {
                    kind: custom.kind,
                    action: custom.action,
                    weight: custom.weight,
                    regex,
                });
            }
        }

        rules.sort_by_key(|rule| rule.kind.priority());

        let rules = Arc::new(rules);
        self.lock_cache().insert(word.to_string(), Arc::clone(&rules));
        rules
    }

    /// Score the candidate at `[match_start, match_end)` (char offsets)
    /// against its rule set, evaluated over the clamped context window.
    pub fn analyze(
        &self,
        text: &str,
        match_start: usize,
        match_end: usize,
        word: &str,
    ) -> ContextOutcome {
        let chars: Vec<char> = text.chars().collect();
        let window_start = match_start.saturating_sub(self.window);
        let window_end = (match_end + self.window).min(chars.len());
        let context: String = chars[window_start..window_end.max(window_start)].iter().collect();

        let rules = self.rules_for(word);
        let mut score = 1.0_f64;
        let mut applied_rules = Vec::with_capacity(rules.len());

        for rule in rules.iter() {
            let matched = rule.regex.is_match(&context);
            applied_rules.push(AppliedRule {
                kind: rule.kind,
                weight: rule.weight,
                matched,
            });
            if !matched {
                continue;
            }
            match rule.action {
                RuleAction::Reduce => score *= rule.weight,
                RuleAction::Increase => score *= 2.0 - rule.weight,
                RuleAction::Whitelist => {
                    score = 0.0;
                    break;
                }
            }
        }

        let fired = applied_rules.iter().filter(|r| r.matched).count();
        let confidence = match fired {
            0 => Confidence::High,
            1 | 2 => Confidence::Medium,
            _ => Confidence::Low,
        };

        ContextOutcome {
            score: score.clamp(0.0, 1.0),
            confidence,
            applied_rules,
            context,
        }
    }
}
