//! Tone-targeted rewriting.

use async_trait::async_trait;
use tonlama_core::ToneLabel;
use tracing::warn;

use crate::error::AiError;
use crate::gemini::GeminiClient;
use crate::prompts::{REWRITE_SYSTEM_PROMPT, build_rewrite_prompt};

pub const DEFAULT_FONT: &str = "Arial";

/// Leading chatter the model sometimes adds, checked in this order.
const PREFIXES: &[&str] = &["'metin:", "metin:", "çıktı:", "işte metin:", "'", "\""];
const SUFFIXES: &[&str] = &["'", "\""];

#[derive(Debug, Clone, PartialEq)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: ToneLabel,
    /// Style hint only; never applied as formatting.
    pub font: String,
}

impl RewriteRequest {
    pub fn new(text: impl Into<String>, tone: ToneLabel) -> Self {
        Self {
            text: text.into(),
            tone,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewritten text, already cleaned. Never empty on success.
    async fn rewrite(&self, request: &RewriteRequest) -> Result<String, AiError>;
}

/// Trim model output and strip wrapper prefixes/quotes. `None` if nothing is left.
pub fn clean_generated(raw: &str) -> Option<String> {
    let mut text = raw.trim();
    if text.is_empty() {
        return None;
    }

    for prefix in PREFIXES {
        if let Some(rest) = strip_prefix_ci(text, prefix) {
            text = rest.trim();
        }
    }
    for suffix in SUFFIXES {
        if let Some(rest) = text.strip_suffix(suffix) {
            text = rest.trim();
        }
    }

    (!text.is_empty()).then(|| text.to_string())
}

/// Case-insensitive `strip_prefix` for a lower-case `prefix`.
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let n = prefix.chars().count();
    let mut boundaries = text.char_indices().map(|(i, _)| i).chain([text.len()]);
    let end = boundaries.nth(n)?;
    (text[..end].to_lowercase() == prefix).then(|| &text[end..])
}

#[async_trait]
impl Rewriter for GeminiClient {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<String, AiError> {
        let prompt = build_rewrite_prompt(&request.text, request.tone, &request.font);
        let raw = self
            .generate(&self.config().rewrite_model, &prompt, REWRITE_SYSTEM_PROMPT, None)
            .await?;
        clean_generated(&raw).ok_or_else(|| {
            warn!(tone = %request.tone, "model returned an empty rewrite");
            AiError::EmptyGeneration
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_trimmed() {
        assert_eq!(clean_generated("  Merhaba.  \n").as_deref(), Some("Merhaba."));
    }

    #[test]
    fn empty_output_is_none() {
        assert_eq!(clean_generated(""), None);
        assert_eq!(clean_generated("   \n"), None);
    }

    #[test]
    fn strips_label_prefixes_case_insensitively() {
        assert_eq!(clean_generated("Metin: Sayın yetkili").as_deref(), Some("Sayın yetkili"));
        assert_eq!(clean_generated("Çıktı: Teşekkürler").as_deref(), Some("Teşekkürler"));
        assert_eq!(clean_generated("'metin: Selam'").as_deref(), Some("Selam"));
    }

    #[test]
    fn strips_wrapping_quotes() {
        assert_eq!(clean_generated("\"Rica ederim.\"").as_deref(), Some("Rica ederim."));
        assert_eq!(clean_generated("'Rica ederim.'").as_deref(), Some("Rica ederim."));
    }

    #[test]
    fn only_quotes_is_none() {
        assert_eq!(clean_generated("\"\""), None);
        assert_eq!(clean_generated("metin:"), None);
    }

    #[test]
    fn inner_text_untouched() {
        let text = "Proje hakkında bazı endişelerimi iletmek isterim.";
        assert_eq!(clean_generated(text).as_deref(), Some(text));
    }

    #[test]
    fn prefix_longer_than_text() {
        assert_eq!(strip_prefix_ci("me", "metin:"), None);
        assert_eq!(strip_prefix_ci("metin:", "metin:"), Some(""));
    }

    #[test]
    fn request_defaults_font() {
        let req = RewriteRequest::new("selam", ToneLabel::Formal);
        assert_eq!(req.font, "Arial");
    }
}
