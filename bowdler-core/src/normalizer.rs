//! Leet-speak and case normalization with offset maps
//!
//! Substitutions change length (`|-|` → `h`, `ph` → `f`, `ß` → `ss`), so a
//! span found on a normalized view cannot be used on the original text
//! directly. [`NormalizedText`] therefore carries, for every normalized
//! char, the original char range it came from; passes compose these maps,
//! and matchers report spans of the original text no matter how many
//! normalization steps ran in between.

/// A text view whose chars map back to original char offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    chars: Vec<char>,
    /// Original char offset where normalized char `i` begins
    starts: Vec<usize>,
    /// Original char offset one past where normalized char `i` ends
    ends: Vec<usize>,
}

impl NormalizedText {
    /// View the text unchanged, with identity offset maps
    pub fn identity(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let starts = (0..chars.len()).collect();
        let ends = (1..=chars.len()).collect();
        Self { chars, starts, ends }
    }

    /// Unicode-lowercase the text. A single uppercase char may fold to
    /// several chars (`İ`, `ß` under some mappings); each folded char maps
    /// back to the one original char it came from.
    pub fn fold_case(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut starts = Vec::with_capacity(text.len());
        let mut ends = Vec::with_capacity(text.len());

        for (index, ch) in text.chars().enumerate() {
            for folded in ch.to_lowercase() {
                chars.push(folded);
                starts.push(index);
                ends.push(index + 1);
            }
        }
        Self { chars, starts, ends }
    }

    /// The normalized chars
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of normalized chars
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the view is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Map a non-empty normalized span `[start, end)` to the original
    /// char span it covers.
    pub fn source_span(&self, start: usize, end: usize) -> (usize, usize) {
        debug_assert!(start < end && end <= self.chars.len());
        (self.starts[start], self.ends[end - 1])
    }
}

/// Converts leet-speak substitutions to canonical letters
///
/// Pure function of its substitution table; holds no per-call state.
#[derive(Debug, Clone)]
pub struct LeetNormalizer {
    /// Substitution tokens sorted longest first so multi-char glyph
    /// clusters win over their single-char prefixes (`|-|` → `h` must be
    /// tried before `|` → `i`).
    mappings: Vec<(Vec<char>, char)>,
}

/// The reference substitution table. Applied to lowercased text, so
/// letter-form entries (`v`, `z`, `j`, `ph`, `vv`) are lowercase only.
const LEET_MAPPINGS: &[(&str, char)] = &[
    ("@", 'a'),
    ("^", 'a'),
    ("4", 'a'),
    ("8", 'b'),
    ("6", 'b'),
    ("|3", 'b'),
    ("(", 'c'),
    ("<", 'c'),
    ("©", 'c'),
    ("|)", 'd'),
    ("0", 'o'),
    ("3", 'e'),
    ("€", 'e'),
    ("|=", 'f'),
    ("ph", 'f'),
    ("9", 'g'),
    ("#", 'h'),
    ("|-|", 'h'),
    ("1", 'i'),
    ("!", 'i'),
    ("|", 'i'),
    ("_|", 'j'),
    ("¿", 'j'),
    ("|<", 'k'),
    ("1<", 'k'),
    ("|\\/|", 'm'),
    ("/\\/\\", 'm'),
    ("|\\|", 'n'),
    ("//", 'n'),
    ("()", 'o'),
    ("|*", 'p'),
    ("|o", 'p'),
    ("(_,)", 'q'),
    ("()_", 'q'),
    ("|2", 'r'),
    ("12", 'r'),
    ("5", 's'),
    ("$", 's'),
    ("z", 's'),
    ("7", 't'),
    ("+", 't'),
    ("†", 't'),
    ("|_|", 'u'),
    ("(_)", 'u'),
    ("v", 'u'),
    ("\\/", 'v'),
    ("|/", 'v'),
    ("\\/\\/", 'w'),
    ("vv", 'w'),
    ("><", 'x'),
    ("}{", 'x'),
    ("`/", 'y'),
    ("j", 'y'),
    ("2", 'z'),
    ("7_", 'z'),
];

impl Default for LeetNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LeetNormalizer {
    /// Normalizer with the reference substitution table
    pub fn new() -> Self {
        let mut mappings: Vec<(Vec<char>, char)> = LEET_MAPPINGS
            .iter()
            .map(|&(token, replacement)| (token.chars().collect(), replacement))
            .collect();
        // Stable: same-length tokens keep table order
        mappings.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { mappings }
    }

    /// Apply the table position-wise, longest token first, composing the
    /// source offset maps so spans on the result still address the
    /// original text.
    pub fn normalize(&self, src: &NormalizedText) -> NormalizedText {
        let input = src.chars();
        let mut chars = Vec::with_capacity(input.len());
        let mut starts = Vec::with_capacity(input.len());
        let mut ends = Vec::with_capacity(input.len());

        let mut i = 0;
        while i < input.len() {
            let matched = self.mappings.iter().find(|(token, _)| {
                input[i..].len() >= token.len() && input[i..i + token.len()] == token[..]
            });
            match matched {
                Some((token, replacement)) => {
                    let (span_start, span_end) = src.source_span(i, i + token.len());
                    chars.push(*replacement);
                    starts.push(span_start);
                    ends.push(span_end);
                    i += token.len();
                }
                None => {
                    chars.push(input[i]);
                    starts.push(src.starts[i]);
                    ends.push(src.ends[i]);
                    i += 1;
                }
            }
        }
        NormalizedText { chars, starts, ends }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(view: &NormalizedText) -> String {
        view.chars().iter().collect()
    }

    #[test]
    fn identity_has_identity_maps() {
        let view = NormalizedText::identity("damn");
        assert_eq!(rendered(&view), "damn");
        assert_eq!(view.source_span(0, 4), (0, 4));
        assert_eq!(view.source_span(1, 3), (1, 3));
    }

    #[test]
    fn fold_case_lowercases_in_place() {
        let view = NormalizedText::fold_case("BullShit");
        assert_eq!(rendered(&view), "bullshit");
        assert_eq!(view.source_span(0, 8), (0, 8));
    }

    #[test]
    fn fold_case_expansion_maps_to_one_source_char() {
        // U+0130 lowercases to "i" plus a combining dot above
        let view = NormalizedText::fold_case("İx");
        assert_eq!(view.len(), 3);
        assert_eq!(view.source_span(0, 2), (0, 1));
        assert_eq!(view.source_span(2, 3), (1, 2));
    }

    #[test]
    fn digit_and_symbol_substitutions() {
        let leet = LeetNormalizer::new();
        let view = leet.normalize(&NormalizedText::identity("$h1t"));
        assert_eq!(rendered(&view), "shit");
        // 1:1 substitutions keep identity spans
        assert_eq!(view.source_span(0, 4), (0, 4));
    }

    #[test]
    fn multi_char_tokens_win_over_prefixes() {
        let leet = LeetNormalizer::new();
        let view = leet.normalize(&NormalizedText::identity("|-|e||"));
        // "|-|" becomes h before "|" can become i
        assert_eq!(rendered(&view), "heii");
    }

    #[test]
    fn contracting_substitution_spans_cover_the_token() {
        let leet = LeetNormalizer::new();
        let view = leet.normalize(&NormalizedText::identity("graph"));
        assert_eq!(rendered(&view), "graf");
        // The f covers original chars 3..5 ("ph")
        assert_eq!(view.source_span(3, 4), (3, 5));
        assert_eq!(view.source_span(0, 4), (0, 5));
    }

    #[test]
    fn composes_with_case_folding() {
        let leet = LeetNormalizer::new();
        let folded = NormalizedText::fold_case("PH4T");
        let view = leet.normalize(&folded);
        assert_eq!(rendered(&view), "fat");
        // f covers "PH" in the original
        assert_eq!(view.source_span(0, 1), (0, 2));
        assert_eq!(view.source_span(0, 3), (0, 4));
    }

    #[test]
    fn unmapped_text_is_unchanged() {
        let leet = LeetNormalizer::new();
        let view = leet.normalize(&NormalizedText::identity("hello there"));
        assert_eq!(rendered(&view), "hello there");
    }
}
