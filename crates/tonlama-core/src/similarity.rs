//! TF-IDF cosine similarity over a two-document corpus.
//!
//! IDF is fitted on exactly the pair being compared, so a score is only
//! meaningful for that pair and not comparable across pairs.
//!
//! Weighting:
//!
//! - terms: two or more letters, digits or `_`
//! - tf: raw count
//! - idf: `ln((1 + n) / (1 + df)) + 1`, n = 2
//! - each document vector L2-normalized

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::VectorizeError;

static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\p{L}\p{N}_]{2,}\b").unwrap());

const N_DOCS: f64 = 2.0;

/// Cosine similarity of two cleaned documents in their shared TF-IDF space.
///
/// Result is clamped to [0, 1].
pub fn tfidf_cosine(doc_a: &str, doc_b: &str) -> Result<f64, VectorizeError> {
    let counts_a = term_counts(doc_a);
    let counts_b = term_counts(doc_b);

    if counts_a.is_empty() && counts_b.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }
    if counts_a.is_empty() {
        return Err(VectorizeError::ZeroVector(0));
    }
    if counts_b.is_empty() {
        return Err(VectorizeError::ZeroVector(1));
    }

    // Vocabulary in sorted order: the dot product sums in the same order
    // whichever document comes first.
    let mut vocab: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (&term, &n) in &counts_a {
        vocab.entry(term).or_default().0 = n as f64;
    }
    for (&term, &n) in &counts_b {
        vocab.entry(term).or_default().1 = n as f64;
    }

    let weighted: Vec<(f64, f64)> = vocab
        .values()
        .map(|&(tf_a, tf_b)| {
            let df = (tf_a > 0.0) as u8 as f64 + (tf_b > 0.0) as u8 as f64;
            let idf = ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0;
            (tf_a * idf, tf_b * idf)
        })
        .collect();

    let norm_a = weighted.iter().map(|(a, _)| a * a).sum::<f64>().sqrt();
    let norm_b = weighted.iter().map(|(_, b)| b * b).sum::<f64>().sqrt();
    let dot: f64 = weighted.iter().map(|(a, b)| (a / norm_a) * (b / norm_b)).sum();

    Ok(dot.clamp(0.0, 1.0))
}

fn term_counts(doc: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for m in TERM.find_iter(doc) {
        *counts.entry(m.as_str()).or_default() += 1;
    }
    counts
}
