//! HTTP surface: the web page and the JSON summarize endpoint.

use crate::pipeline::Summarizer;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const INDEX_HTML: &str = include_str!("../assets/index.html");
const SCRIPT_JS: &str = include_str!("../assets/script.js");

/// Shared application state.
struct AppState {
    summarizer: Summarizer,
}

/// Build the application router around a summarization pipeline.
pub fn router(summarizer: Summarizer) -> Router {
    let state = Arc::new(AppState { summarizer });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/health", get(health))
        .route("/summarize", post(summarize))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router on an already-bound listener until the process stops.
pub async fn serve(listener: tokio::net::TcpListener, summarizer: Summarizer) -> std::io::Result<()> {
    axum::serve(listener, router(summarizer)).await
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SummarizeRequest {
    video_url: String,
}

/// Either a summary or an error message, never both.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum SummarizeResponse {
    Summary(String),
    Error(String),
}

// === Handlers ===

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    match state.summarizer.summarize_url(&req.video_url).await {
        Ok(summary) => {
            info!("Summary ready ({} lines)", summary.lines().count());
            (StatusCode::OK, Json(SummarizeResponse::Summary(summary)))
        }
        // Caption problems are an expected outcome, reported in a normal response.
        Err(e) if e.is_transcript() => {
            warn!("{}", e);
            (StatusCode::OK, Json(SummarizeResponse::Error(e.to_string())))
        }
        Err(e) => {
            warn!("Summarization failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SummarizeResponse::Error(e.to_string())),
            )
        }
    }
}
