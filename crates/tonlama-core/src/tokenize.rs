//! Word and sentence segmentation.
//!
//! [`UnicodeTokenizer`] follows UAX #29 boundaries. Word tokens are every
//! non-whitespace segment between word boundaries, so punctuation marks come
//! out as tokens of their own ("Merhaba," → "Merhaba", ",").

use unicode_segmentation::UnicodeSegmentation;

use crate::error::TokenizeError;

/// Locale-aware segmentation. Implementations may fail; callers fall back.
pub trait Tokenizer: Send + Sync {
    fn words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizeError>;

    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizeError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizeError> {
        Ok(text
            .split_word_bounds()
            .filter(|seg| !seg.trim().is_empty())
            .collect())
    }

    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizeError> {
        Ok(text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .collect())
    }
}
