//! HTTP request handlers

use super::state::AppState;
use crate::search::{SearchRequest, SearchResponse};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

/// HTTP-level error: status plus a machine-readable JSON body
type ApiError = (StatusCode, Json<serde_json::Value>);

fn validation_error(detail: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "validation", "detail": detail})),
    )
}

/// POST /search handler.
///
/// Per-domain upstream failures are reported in-band with status 200; only
/// boundary validation produces an HTTP error here.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    validate(&request, state.max_domains()).map_err(|detail| {
        debug!(detail = %detail, "rejecting search request");
        validation_error(detail)
    })?;

    let start = Instant::now();
    info!("processing {} domains", request.domains.len());

    let results = state
        .search
        .run(&request.domains, request.question.as_deref())
        .await;

    let elapsed_seconds = (start.elapsed().as_secs_f64() * 100.0).round() / 100.0;
    let failed = results.iter().filter(|r| !r.is_success()).count();
    info!(
        elapsed_seconds,
        failed,
        total = results.len(),
        "search batch complete"
    );

    Ok(Json(SearchResponse {
        elapsed_seconds,
        results,
    }))
}

fn validate(request: &SearchRequest, max_domains: usize) -> Result<(), String> {
    if request.domains.is_empty() {
        return Err("domains must not be empty".to_string());
    }
    if request.domains.len() > max_domains {
        return Err(format!(
            "domains holds {} entries, maximum is {max_domains}",
            request.domains.len()
        ));
    }
    for (i, domain) in request.domains.iter().enumerate() {
        if domain.trim().is_empty() {
            return Err(format!("domains[{i}] must not be blank"));
        }
    }
    Ok(())
}

/// GET /health handler. Never touches the upstream API.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
