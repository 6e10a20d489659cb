//! HTTP surface: `POST /classify` and `POST /rewrite`.
//!
//! Application failures are reported in the body (`success: false`); only a
//! malformed request is answered with a 4xx by the JSON extractor.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ServiceError;
use crate::orchestrator::{ClassifyResponse, Orchestrator, RewriteResponse};

#[derive(Deserialize)]
struct ClassifyBody {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct RewriteBody {
    #[serde(default)]
    text: String,
    tone: Option<String>,
    font: Option<String>,
}

pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/classify", post(classify))
        .route("/rewrite", post(rewrite))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, orchestrator: Arc<Orchestrator>) -> Result<(), ServiceError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "tonlama listening");
    axum::serve(listener, router(orchestrator)).await?;
    Ok(())
}

async fn classify(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(body): Json<ClassifyBody>,
) -> Json<ClassifyResponse> {
    Json(orchestrator.classify(&body.text).await)
}

async fn rewrite(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(body): Json<RewriteBody>,
) -> Json<RewriteResponse> {
    Json(
        orchestrator
            .rewrite(&body.text, body.tone.as_deref(), body.font.as_deref())
            .await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClassifier, FakeRewriter, orchestrator};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tonlama_core::ToneLabel;
    use tower::ServiceExt;

    const POLITE: &str = "Proje hakkında bazı endişelerimi iletmek isterim.";

    fn app(classifier: FakeClassifier) -> Router {
        router(Arc::new(orchestrator(FakeRewriter::returns(POLITE), classifier)))
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Option<Value>) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).ok())
    }

    #[tokio::test]
    async fn classify_route() {
        let (status, json) = post_json(
            app(FakeClassifier::detects(ToneLabel::Academic, 0.75)),
            "/classify",
            r#"{"text": "Bu çalışmada yöntem ayrıntılı biçimde incelenmiştir."}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["label"], "academic");
        assert_eq!(json["score"], 0.75);
    }

    #[tokio::test]
    async fn classify_route_empty_text() {
        let (_, json) = post_json(
            app(FakeClassifier::detects(ToneLabel::Academic, 0.75)),
            "/classify",
            "{}",
        )
        .await;
        let json = json.unwrap();
        assert_eq!(json["label"], "empty");
        assert_eq!(json["score"], 0.0);
    }

    #[tokio::test]
    async fn rewrite_route_success() {
        let (status, json) = post_json(
            app(FakeClassifier::detects(ToneLabel::Rude, 0.9)),
            "/rewrite",
            r#"{"text": "Bu proje hakkında çok kızgınım ve memnun değilim.", "tone": "formal"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["rewritten"], POLITE);
        let sim = json["metrics"]["similarity"].as_f64().unwrap();
        assert!(sim > 0.0 && sim < 1.0);
        assert!(json["metrics"]["readability_original"].as_f64().unwrap() > 0.0);
        assert!(json["warning"].as_str().unwrap().contains("RUDE"));
    }

    #[tokio::test]
    async fn rewrite_route_empty_text() {
        let (status, json) = post_json(
            app(FakeClassifier::detects(ToneLabel::Formal, 0.9)),
            "/rewrite",
            r#"{"text": "   "}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "text must not be empty");
    }

    #[tokio::test]
    async fn malformed_body_is_client_error() {
        let (status, _) = post_json(
            app(FakeClassifier::detects(ToneLabel::Formal, 0.9)),
            "/rewrite",
            "{not json",
        )
        .await;
        assert!(status.is_client_error());
    }
}
