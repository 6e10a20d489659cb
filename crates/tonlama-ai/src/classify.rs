//! Tone classification against the closed label vocabulary.

use async_trait::async_trait;
use serde::Deserialize;
use tonlama_core::{Detection, ToneLabel};
use tracing::{debug, warn};

use crate::error::AiError;
use crate::gemini::GeminiClient;
use crate::prompts::{CLASSIFY_SYSTEM_PROMPT, build_classify_prompt, classification_schema};

#[async_trait]
pub trait ToneClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Detection, AiError>;
}

#[derive(Deserialize)]
struct RawClassification {
    label: Option<String>,
    score: Option<f32>,
}

/// Parse the model's `{label, score}` JSON into a [`Detection`].
///
/// A missing label, or one outside the tone vocabulary, becomes
/// `undetermined`. A missing score is 0; scores are clamped into [0, 1].
pub fn parse_classification(json_text: &str) -> Result<Detection, AiError> {
    let raw: RawClassification = serde_json::from_str(json_text)?;
    let label = match raw.label {
        Some(s) => match s.parse::<ToneLabel>() {
            Ok(l) if !l.is_sentinel() => l,
            _ => {
                warn!(label = %s, "classifier returned a label outside the vocabulary");
                ToneLabel::Undetermined
            }
        },
        None => ToneLabel::Undetermined,
    };
    Ok(Detection::new(label, raw.score.unwrap_or(0.0)))
}

#[async_trait]
impl ToneClassifier for GeminiClient {
    async fn classify(&self, text: &str) -> Result<Detection, AiError> {
        let prompt = build_classify_prompt(text);
        let json_text = self
            .generate(
                &self.config().classify_model,
                &prompt,
                CLASSIFY_SYSTEM_PROMPT,
                Some(classification_schema()),
            )
            .await?;
        let detection = parse_classification(&json_text)?;
        debug!(label = %detection.label, score = detection.score, "classified");
        Ok(detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_label() {
        let d = parse_classification(r#"{"label": "academic", "score": 0.91}"#).unwrap();
        assert_eq!(d.label, ToneLabel::Academic);
        assert!((d.score - 0.91).abs() < 1e-6);
    }

    #[test]
    fn parses_turkish_label() {
        let d = parse_classification(r#"{"label": "samimi", "score": 0.7}"#).unwrap();
        assert_eq!(d.label, ToneLabel::Casual);
    }

    #[test]
    fn unknown_label_is_undetermined() {
        let d = parse_classification(r#"{"label": "sarcastic", "score": 0.8}"#).unwrap();
        assert_eq!(d.label, ToneLabel::Undetermined);
        assert!((d.score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn sentinel_label_from_model_is_undetermined() {
        let d = parse_classification(r#"{"label": "connection_error", "score": 1.0}"#).unwrap();
        assert_eq!(d.label, ToneLabel::Undetermined);
    }

    #[test]
    fn missing_fields_default() {
        let d = parse_classification("{}").unwrap();
        assert_eq!(d.label, ToneLabel::Undetermined);
        assert_eq!(d.score, 0.0);
    }

    #[test]
    fn score_is_clamped() {
        let d = parse_classification(r#"{"label": "rude", "score": 7.5}"#).unwrap();
        assert_eq!(d.score, 1.0);
    }

    #[test]
    fn invalid_json_is_unparseable() {
        let err = parse_classification("not json").unwrap_err();
        assert_eq!(err.sentinel(), ToneLabel::Unparseable);
        let err = parse_classification("").unwrap_err();
        assert_eq!(err.sentinel(), ToneLabel::Unparseable);
    }
}
