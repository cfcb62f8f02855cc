// ============================================================
// Layer 5 — Word Tokenizer
// ============================================================
// Splits one sentence into word and punctuation tokens.
//
// Words are runs of letters/digits, optionally joined by an
// internal apostrophe, hyphen or period:
//   "don't", "well-known", "U.S", "3.14"
// Any other non-space character is a token of its own.
//
// Reference: regex crate documentation (Unicode classes)

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-.][\p{L}\p{N}]+)*|\S")
        .expect("token pattern is valid")
});

/// Tokens of `sentence`, in order, borrowed from the input.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    TOKEN.find_iter(sentence).map(|m| m.as_str()).collect()
}

/// True when the token contains at least one letter or digit
pub fn is_word(token: &str) -> bool {
    token.chars().any(|c| c.is_alphanumeric())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_words_and_punctuation() {
        assert_eq!(
            tokenize("The fox, quickly, jumped."),
            vec!["The", "fox", ",", "quickly", ",", "jumped", "."]
        );
    }

    #[test]
    fn test_keeps_internal_joiners() {
        assert_eq!(
            tokenize("A well-known U.S. rule isn't 3.14 long"),
            vec!["A", "well-known", "U.S", ".", "rule", "isn't", "3.14", "long"]
        );
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(tokenize("Café Zürich"), vec!["Café", "Zürich"]);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("fox"));
        assert!(is_word("42"));
        assert!(!is_word("—"));
    }
}
