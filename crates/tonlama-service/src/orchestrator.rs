//! Sequences the model calls and the core metrics into client responses.
//!
//! Classification and rewriting are independent calls and run concurrently;
//! metrics wait for the rewrite, the conflict check waits for the detection.
//! Metrics and warnings are advisory: a failed classification degrades to a
//! sentinel label and never blocks the rewrite.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tonlama_ai::{AiError, DEFAULT_FONT, RewriteRequest, Rewriter, ToneClassifier};
use tonlama_core::{ConflictResolver, Detection, MetricsRecord, ToneLabel, compute_metrics};
use tracing::{info, warn};

use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub label: ToneLabel,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Tone conflict warning; serialized as `null` when absent.
    pub warning: Option<String>,
}

impl RewriteResponse {
    fn failed(error: impl Into<String>, warning: Option<String>) -> Self {
        Self {
            success: false,
            rewritten: None,
            metrics: None,
            error: Some(error.into()),
            warning,
        }
    }
}

pub struct Orchestrator {
    rewriter: Arc<dyn Rewriter>,
    classifier: Arc<dyn ToneClassifier>,
    resolver: ConflictResolver,
}

impl Orchestrator {
    pub fn new(rewriter: Arc<dyn Rewriter>, classifier: Arc<dyn ToneClassifier>) -> Self {
        Self {
            rewriter,
            classifier,
            resolver: ConflictResolver::default(),
        }
    }

    /// Detect the tone of `text`. Empty text is `empty` without a model call.
    pub async fn classify(&self, text: &str) -> ClassifyResponse {
        let text = text.trim();
        let detection = if text.is_empty() {
            Detection::sentinel(ToneLabel::Empty)
        } else {
            self.detect(text).await
        };
        ClassifyResponse {
            success: true,
            label: detection.label,
            score: detection.score,
        }
    }

    /// Rewrite `text` into `tone`, attaching metrics and any conflict warning.
    ///
    /// `tone` defaults to neutral and `font` to Arial.
    pub async fn rewrite(
        &self,
        text: &str,
        tone: Option<&str>,
        font: Option<&str>,
    ) -> RewriteResponse {
        let text = text.trim();
        if text.is_empty() {
            return RewriteResponse::failed(ServiceError::EmptyText.to_string(), None);
        }
        let tone = match requested_tone(tone) {
            Ok(t) => t,
            Err(e) => return RewriteResponse::failed(e.to_string(), None),
        };

        let request = RewriteRequest {
            text: text.to_string(),
            tone,
            font: font
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .unwrap_or(DEFAULT_FONT)
                .to_string(),
        };

        let (detection, rewritten) =
            tokio::join!(self.detect(text), self.rewriter.rewrite(&request));

        let warning = self.resolver.resolve(tone, detection.label);
        if warning.is_some() {
            info!(requested = %tone, detected = %detection.label, "tone conflict");
        }

        let rewritten = match rewritten {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, tone = %tone, "rewrite failed");
                let message = if matches!(e, AiError::EmptyGeneration) {
                    e.to_string()
                } else {
                    format!("API error: {e}")
                };
                return RewriteResponse::failed(message, warning);
            }
        };

        let metrics = compute_metrics(text, &rewritten).rounded();
        info!(
            tone = %tone,
            similarity = metrics.similarity,
            readability_original = metrics.readability_original,
            readability_rewritten = metrics.readability_rewritten,
            "rewrite complete"
        );

        RewriteResponse {
            success: true,
            rewritten: Some(rewritten),
            metrics: Some(metrics),
            error: None,
            warning,
        }
    }

    async fn detect(&self, text: &str) -> Detection {
        match self.classifier.classify(text).await {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "classification failed");
                Detection::sentinel(e.sentinel())
            }
        }
    }
}

/// Parse the caller's tone; missing or blank means neutral. Sentinels are rejected.
fn requested_tone(tone: Option<&str>) -> Result<ToneLabel, ServiceError> {
    let Some(raw) = tone.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(ToneLabel::Neutral);
    };
    let label: ToneLabel = raw
        .parse()
        .map_err(|_| ServiceError::UnknownTone(raw.to_string()))?;
    if label.is_sentinel() {
        return Err(ServiceError::SentinelTone(label.to_string()));
    }
    Ok(label)
}
