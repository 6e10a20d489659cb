use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("text must not be empty")]
    EmptyText,
    #[error("unknown tone: {0}")]
    UnknownTone(String),
    #[error("{0} is not a selectable tone")]
    SentinelTone(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
