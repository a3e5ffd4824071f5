//! HTTP collaborator layer: accepts a posting over JSON and forwards it to
//! the analysis engine. One analysis per request, no shared mutable state.

use crate::analyze;
use crate::error::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone)]
pub struct AppState {
    pub min_length: usize,
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// POST /analyze-job with body `{"job_description": string}`.
/// 400 when the body is not JSON, the field is missing or not a string, or
/// the text falls below the configured minimum; 200 with the analysis
/// otherwise.
pub async fn analyze_job_handler(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> Response {
    let Ok(body) = serde_json::from_slice::<Value>(&body) else {
        return bad_request("invalid JSON body");
    };
    let Some(description) = body.get("job_description").and_then(Value::as_str) else {
        return bad_request("job_description is required and must be a string");
    };
    let length = description.trim().chars().count();
    if length == 0 {
        return bad_request("job_description must not be empty");
    }
    if length < state.min_length {
        return bad_request(&format!(
            "job_description must be at least {} characters",
            state.min_length
        ));
    }

    let result = analyze::analyze(description);
    tracing::debug!(
        risk_score = result.risk_score,
        risk_level = %result.risk_level,
        "analyzed posting"
    );
    (StatusCode::OK, Json(result)).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze-job", post(analyze_job_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn serve(bind: &str, min_length: usize) -> Result<()> {
    let app = router(AppState { min_length });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
