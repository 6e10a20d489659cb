//! Cleaning applied to both sides of a similarity comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::stopwords::StopWords;
use crate::tokenize::Tokenizer;

/// Anything that is not a letter, digit, `_` or whitespace. Combining marks
/// are dropped too, so lower-cased `İ` (`i` + U+0307) folds to plain `i`.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

/// Lower-case and drop punctuation/symbols; keeps letters, digits, `_`, whitespace.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Lower-case, strip punctuation, tokenize, drop stop-words, re-join with spaces.
///
/// If the tokenizer fails, the stripped text is returned unsegmented.
pub fn normalize_with(text: &str, tokenizer: &dyn Tokenizer, stop_words: &StopWords) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = strip_punctuation(text);
    match tokenizer.words(&stripped) {
        Ok(words) => words
            .into_iter()
            .filter(|w| !stop_words.contains(w))
            .collect::<Vec<_>>()
            .join(" "),
        Err(e) => {
            warn!(error = %e, "tokenization failed; using unsegmented text");
            stripped
        }
    }
}
