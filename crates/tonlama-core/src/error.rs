use thiserror::Error;

/// Word or sentence segmentation could not be performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("segmentation resources unavailable for locale {0}")]
    MissingResources(String),

    #[error("malformed input: {0}")]
    Malformed(String),
}

/// The two-document TF-IDF space could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain no scorable terms")]
    EmptyVocabulary,

    #[error("document {0} has no scorable terms")]
    ZeroVector(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tone label: {0:?}")]
pub struct ParseToneError(pub String);
