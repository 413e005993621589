use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::debug;

use phishlens_analyzer::PhishingAnalyzer;
use phishlens_common::Verdict;

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../templates/index.html");

pub struct AppState {
    pub analyzer: PhishingAnalyzer,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    url: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/analyze", post(analyze_form))
        .route("/api/analyze", post(analyze_json))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // No caching of verdicts
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (no submitted URL)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

/// `POST /analyze` with a form-encoded `url` field.
async fn analyze_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<AnalyzeRequest>, FormRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let request = form.map(|Form(r)| r).unwrap_or_else(|rejection| {
        debug!(%rejection, "Unreadable form body, treating as missing URL");
        AnalyzeRequest::default()
    });
    run_analysis(&state, &request.url).await
}

/// `POST /api/analyze` with a JSON `{"url": ...}` body.
async fn analyze_json(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_else(|rejection| {
        debug!(%rejection, "Unreadable JSON body, treating as missing URL");
        AnalyzeRequest::default()
    });
    run_analysis(&state, &request.url).await
}

async fn run_analysis(state: &AppState, url: &str) -> Result<Json<Verdict>, ApiError> {
    let verdict = state.analyzer.analyze(url.trim()).await?;
    Ok(Json(verdict))
}
