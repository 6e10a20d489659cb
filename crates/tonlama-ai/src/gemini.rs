//! HTTP client for Gemini's `generateContent` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::AiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Models root, e.g. `https://generativelanguage.googleapis.com/v1beta/models`.
    pub base_url: String,
    pub rewrite_model: String,
    pub classify_model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rewrite_model: DEFAULT_MODEL.to_string(),
            classify_model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gemini client shared by the rewriter and classifier.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

// ── Wire types ──

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn new(prompt: &'a str, system: &'a str, response_schema: Option<Value>) -> Self {
        let response_mime_type = response_schema.as_ref().map(|_| "application/json");
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: [Part { text: system }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type,
                response_schema,
            },
        }
    }
}

/// First candidate's first text part, or empty if the path is missing.
pub(crate) fn first_text(body: &str) -> Result<String, AiError> {
    let resp: GenerateResponse = serde_json::from_str(body)?;
    Ok(resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default())
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config: GeminiConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint URL for `model`, without the API key.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.config.base_url, model)
    }

    /// Run one `generateContent` call and return the first candidate's text.
    ///
    /// With `response_schema`, the model is asked for JSON matching it.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
        response_schema: Option<Value>,
    ) -> Result<String, AiError> {
        let url = self.endpoint(model);
        let payload = GenerateRequest::new(prompt, system, response_schema);

        info!(url = %url, model, "calling gemini");
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let text = first_text(&body)?;
        debug!(chars = text.chars().count(), "gemini responded");
        Ok(text)
    }
}
