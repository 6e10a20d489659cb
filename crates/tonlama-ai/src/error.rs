use thiserror::Error;
use tonlama_core::ToneLabel;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model refused or returned an empty response (a safety filter may be active)")]
    EmptyGeneration,
}

impl AiError {
    /// The sentinel label a failed classification reports.
    pub fn sentinel(&self) -> ToneLabel {
        match self {
            Self::Http(_) | Self::Server { .. } => ToneLabel::ConnectionError,
            Self::Json(_) | Self::EmptyGeneration => ToneLabel::Unparseable,
        }
    }
}
