//! The process-wide text analyzer and the total metric entry points.
//!
//! An [`Analyzer`] pairs a tokenizer with a stop-word set. One default
//! instance is installed at startup (or lazily built with the Turkish list)
//! and never mutated afterwards; the free functions below all read it.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::metrics::MetricsRecord;
use crate::normalize::normalize_with;
use crate::readability::readability_with;
use crate::similarity::tfidf_cosine;
use crate::stopwords::StopWords;
use crate::tokenize::{Tokenizer, UnicodeTokenizer};

static DEFAULT: OnceCell<Analyzer> = OnceCell::new();

/// A tokenizer and stop-word set shared by the metric functions.
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWords,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(StopWords::turkish())
    }
}

impl Analyzer {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_tokenizer(Box::new(UnicodeTokenizer), stop_words)
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>, stop_words: StopWords) -> Self {
        Self {
            tokenizer,
            stop_words,
        }
    }

    /// Install the process-wide analyzer. Fails (returning it) if one is already set.
    pub fn install(analyzer: Analyzer) -> Result<(), Analyzer> {
        DEFAULT.set(analyzer)
    }

    /// The process-wide analyzer, built with Turkish stop-words if none was installed.
    pub fn global() -> &'static Analyzer {
        DEFAULT.get_or_init(Analyzer::default)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_with(text, self.tokenizer.as_ref(), &self.stop_words)
    }

    /// Similarity in [0, 1]; 0.0 for empty or unscorable input.
    pub fn similarity(&self, text1: &str, text2: &str) -> f64 {
        if text1.is_empty() || text2.is_empty() {
            return 0.0;
        }

        let cleaned1 = self.normalize(text1);
        let cleaned2 = self.normalize(text2);
        if cleaned1.is_empty() || cleaned2.is_empty() {
            return 0.0;
        }

        match tfidf_cosine(&cleaned1, &cleaned2) {
            Ok(sim) => sim,
            Err(e) => {
                debug!(error = %e, "vectorization failed; similarity is 0");
                0.0
            }
        }
    }

    pub fn readability(&self, text: &str) -> f64 {
        readability_with(text, self.tokenizer.as_ref())
    }

    pub fn metrics(&self, original: &str, rewritten: &str) -> MetricsRecord {
        MetricsRecord {
            similarity: self.similarity(original, rewritten),
            readability_original: self.readability(original),
            readability_rewritten: self.readability(rewritten),
        }
    }
}

/// Normalize with the process-wide analyzer.
pub fn normalize(text: &str) -> String {
    Analyzer::global().normalize(text)
}

/// Similarity with the process-wide analyzer.
pub fn similarity(text1: &str, text2: &str) -> f64 {
    Analyzer::global().similarity(text1, text2)
}

/// Readability with the process-wide analyzer.
pub fn readability(text: &str) -> f64 {
    Analyzer::global().readability(text)
}

pub fn compute_metrics(original: &str, rewritten: &str) -> MetricsRecord {
    Analyzer::global().metrics(original, rewritten)
}
