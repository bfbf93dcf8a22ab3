//! Detection output types

use serde::Serialize;

/// Coarse classification of how profane a text is, from match count and
/// distinct-word count. Zero matches report [`Severity::Mild`] by
/// convention; `has_profanity` is the clean/dirty signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// At most one match of one word
    Mild,
    /// Two matches or two distinct words
    Moderate,
    /// Three matches or three distinct words
    Severe,
    /// Five matches or four distinct words
    Extreme,
}

impl Severity {
    /// Numeric level, 1 (mild) through 4 (extreme)
    pub fn level(self) -> u8 {
        match self {
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
            Severity::Extreme => 4,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Extreme => "extreme",
        };
        f.write_str(label)
    }
}

/// One reported span of the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPosition {
    /// Literal matched substring as it appears in the input
    pub word: String,
    /// Char offset of the first matched char
    pub start: usize,
    /// Char offset one past the last matched char
    pub end: usize,
    /// Byte offset of the first matched byte
    pub byte_start: usize,
    /// Byte offset one past the last matched byte
    pub byte_end: usize,
}

/// Immutable snapshot of one `detect` call
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    /// Whether any match survived filtering
    pub has_profanity: bool,
    /// Literal matched substrings, in text order
    pub detected_words: Vec<String>,
    /// The input with every kept span redacted
    pub cleaned_text: String,
    /// Severity tier of the whole text
    pub severity: Severity,
    /// Kept spans, in text order
    pub positions: Vec<MatchPosition>,
}

impl DetectionResult {
    /// The result for text with no matches
    pub(crate) fn clean(text: &str) -> Self {
        Self {
            has_profanity: false,
            detected_words: Vec::new(),
            cleaned_text: text.to_string(),
            severity: Severity::Mild,
            positions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_levels_and_ordering() {
        assert_eq!(Severity::Mild.level(), 1);
        assert_eq!(Severity::Extreme.level(), 4);
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Severe < Severity::Extreme);
        assert_eq!(Severity::Moderate.to_string(), "moderate");
    }

    #[test]
    fn clean_result_is_empty_and_mild() {
        let result = DetectionResult::clean("fine text");
        assert!(!result.has_profanity);
        assert_eq!(result.cleaned_text, "fine text");
        assert_eq!(result.severity, Severity::Mild);
        assert!(result.positions.is_empty());
    }
}
