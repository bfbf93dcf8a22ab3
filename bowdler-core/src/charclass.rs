//! Character classes used by boundary policy
//!
//! Whole-word matching needs "is this a word constituent"; strict mode
//! needs the narrower "is this whitespace, punctuation or a symbol", which
//! rejects characters (combining marks, format controls) that merely fail
//! the word-char test.

use std::sync::LazyLock;

use regex::Regex;

/// Unicode punctuation or symbol, the strict-mode boundary class
static PUNCT_OR_SYMBOL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\A[\p{P}\p{S}]\z").ok());

/// Word constituent: alphanumeric in any script, or underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Strict boundary class: whitespace, punctuation, or symbol
pub fn is_strict_boundary(ch: char) -> bool {
    if ch.is_whitespace() {
        return true;
    }
    let mut buf = [0u8; 4];
    let encoded = ch.encode_utf8(&mut buf);
    PUNCT_OR_SYMBOL
        .as_ref()
        .map(|re| re.is_match(encoded))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars_cover_scripts_and_digits() {
        assert!(is_word_char('a'));
        assert!(is_word_char('9'));
        assert!(is_word_char('_'));
        assert!(is_word_char('స'));
        assert!(is_word_char('स'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('!'));
    }

    #[test]
    fn strict_boundary_accepts_space_punct_symbol() {
        assert!(is_strict_boundary(' '));
        assert!(is_strict_boundary('\t'));
        assert!(is_strict_boundary('.'));
        assert!(is_strict_boundary('"'));
        assert!(is_strict_boundary('$'));
        assert!(is_strict_boundary('«'));
    }

    #[test]
    fn strict_boundary_rejects_letters_and_marks() {
        assert!(!is_strict_boundary('a'));
        assert!(!is_strict_boundary('1'));
        // Combining mark: not a word separator in the strict sense
        assert!(!is_strict_boundary('\u{0301}'));
    }
}
