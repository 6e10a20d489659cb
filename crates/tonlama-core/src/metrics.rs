use serde::{Deserialize, Serialize};

/// Scores attached to one rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// TF-IDF cosine between original and rewrite, in [0, 1].
    pub similarity: f64,
    pub readability_original: f64,
    pub readability_rewritten: f64,
}

impl MetricsRecord {
    /// Copy with similarity rounded to 4 decimals, as reported to clients.
    pub fn rounded(self) -> Self {
        Self {
            similarity: (self.similarity * 10_000.0).round() / 10_000.0,
            ..self
        }
    }
}
