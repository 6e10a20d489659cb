//! In-process stand-ins for the model collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tonlama_ai::{AiError, RewriteRequest, Rewriter, ToneClassifier};
use tonlama_core::{Detection, ToneLabel};

use crate::orchestrator::Orchestrator;

pub(crate) fn orchestrator(rewriter: FakeRewriter, classifier: FakeClassifier) -> Orchestrator {
    Orchestrator::new(Arc::new(rewriter), Arc::new(classifier))
}

pub(crate) struct FakeRewriter {
    output: Option<String>,
    pub calls: Arc<AtomicUsize>,
    pub seen: Arc<Mutex<Option<RewriteRequest>>>,
}

impl FakeRewriter {
    pub fn returns(text: &str) -> Self {
        Self {
            output: Some(text.to_string()),
            calls: Arc::default(),
            seen: Arc::default(),
        }
    }

    /// Behaves like a model that refused to answer.
    pub fn fails() -> Self {
        Self {
            output: None,
            calls: Arc::default(),
            seen: Arc::default(),
        }
    }
}

#[async_trait]
impl Rewriter for FakeRewriter {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some(request.clone());
        self.output.clone().ok_or(AiError::EmptyGeneration)
    }
}

enum Outcome {
    Detect(Detection),
    Unreachable,
    Garbled,
}

pub(crate) struct FakeClassifier {
    outcome: Outcome,
    pub calls: Arc<AtomicUsize>,
}

impl FakeClassifier {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::default(),
        }
    }

    pub fn detects(label: ToneLabel, score: f32) -> Self {
        Self::with(Outcome::Detect(Detection::new(label, score)))
    }

    pub fn unreachable() -> Self {
        Self::with(Outcome::Unreachable)
    }

    pub fn garbled() -> Self {
        Self::with(Outcome::Garbled)
    }
}

#[async_trait]
impl ToneClassifier for FakeClassifier {
    async fn classify(&self, _text: &str) -> Result<Detection, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Detect(d) => Ok(*d),
            Outcome::Unreachable => Err(AiError::Server {
                status: 503,
                body: "unavailable".into(),
            }),
            Outcome::Garbled => Err(tonlama_ai::parse_classification("not json").unwrap_err()),
        }
    }
}
