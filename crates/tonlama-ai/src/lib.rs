//! Generative collaborators: rewrite text into a tone, classify a text's tone.
//!
//! Both are served by Gemini's `generateContent` endpoint through
//! [`GeminiClient`]; the orchestrator only sees the [`Rewriter`] and
//! [`ToneClassifier`] traits.

pub mod classify;
pub mod error;
pub mod gemini;
pub mod prompts;
pub mod rewrite;

pub use classify::{ToneClassifier, parse_classification};
pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use rewrite::{DEFAULT_FONT, RewriteRequest, Rewriter, clean_generated};
