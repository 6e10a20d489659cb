//! Core types and text metrics for Tonlama.
//!
//! Everything here is pure and synchronous: tone labels and the conflict
//! policy, plus the similarity and readability scores attached to a rewrite.
//! The metric functions are total; degenerate input yields a zero value.

pub mod analyzer;
pub mod conflict;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod readability;
pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod tone;

pub use analyzer::{Analyzer, compute_metrics, normalize, readability, similarity};
pub use conflict::{ConflictResolver, EQUIVALENCE_CLASSES, resolve_conflict};
pub use error::{ParseToneError, TokenizeError, VectorizeError};
pub use metrics::MetricsRecord;
pub use stopwords::StopWords;
pub use tokenize::{Tokenizer, UnicodeTokenizer};
pub use tone::{Detection, ToneLabel};
