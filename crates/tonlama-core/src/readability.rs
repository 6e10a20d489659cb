//! Readability proxy: average word length in characters.
//!
//! Not a validated readability formula. Sentence count is only a zero-guard.

use tracing::warn;

use crate::tokenize::Tokenizer;

/// Average token length (chars) over the raw text, rounded to 2 decimals.
///
/// Returns 0 for empty text, for zero sentences or words, and when the
/// tokenizer fails.
pub fn readability_with(text: &str, tokenizer: &dyn Tokenizer) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let (sentences, words) = match (tokenizer.sentences(text), tokenizer.words(text)) {
        (Ok(s), Ok(w)) => (s, w),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "tokenization failed; readability is 0");
            return 0.0;
        }
    };

    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    round2(total_chars as f64 / words.len() as f64)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenizeError;
    use crate::tokenize::UnicodeTokenizer;

    struct NoSentences;

    impl Tokenizer for NoSentences {
        fn words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizeError> {
            UnicodeTokenizer.words(text)
        }
        fn sentences<'a>(&self, _: &'a str) -> Result<Vec<&'a str>, TokenizeError> {
            Err(TokenizeError::Malformed("no sentence model".into()))
        }
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(readability_with("", &UnicodeTokenizer), 0.0);
    }

    #[test]
    fn whitespace_only_is_zero() {
        assert_eq!(readability_with("   \n ", &UnicodeTokenizer), 0.0);
    }

    #[test]
    fn punctuation_counts_as_tokens() {
        // Merhaba(7) ,(1) nasılsınız(10) ?(1) → 19 / 4
        assert_eq!(readability_with("Merhaba, nasılsınız?", &UnicodeTokenizer), 4.75);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // "çğü" is 3 chars, 6 bytes.
        assert_eq!(readability_with("çğü", &UnicodeTokenizer), 3.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // (2 + 3 + 3) / 3
        let score = readability_with("ab abc abc", &UnicodeTokenizer);
        assert_eq!(score, 2.67);
    }

    #[test]
    fn tokenizer_failure_is_zero() {
        assert_eq!(readability_with("Merhaba dünya.", &NoSentences), 0.0);
    }
}
