//! HTTP handlers.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::types::{AnalyzeResponse, AppState, ErrorResponse};
use crate::analysis::{analyze, analyze_bounded};
use crate::config::CSV_DOWNLOAD_FILENAME;
use crate::error_handling::InputValidationError;
use crate::export::results_to_csv;
use crate::models::DomainResult;

const INDEX_HTML: &str = include_str!("index.html");

impl IntoResponse for InputValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Extracts the `domains` array from a request body.
///
/// Any body that is not a JSON object whose `domains` field is an array of
/// strings is rejected; nothing is resolved for a rejected request.
pub fn parse_domains(body: &[u8]) -> Result<Vec<String>, InputValidationError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| InputValidationError::new(format!("body is not JSON: {e}")))?;
    let Value::Object(mut fields) = payload else {
        return Err(InputValidationError::new("body is not a JSON object"));
    };
    let Some(Value::Array(items)) = fields.remove("domains") else {
        return Err(InputValidationError::new("`domains` is missing or not an array"));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(domain) => Ok(domain),
            other => Err(InputValidationError::new(format!(
                "`domains[{i}]` is not a string: {other}"
            ))),
        })
        .collect()
}

async fn run_batch(state: &AppState, domains: &[String]) -> Vec<DomainResult> {
    let started = Instant::now();
    let results = match state.max_concurrency {
        Some(limit) => {
            analyze_bounded(domains, state.resolver.as_ref(), &state.providers, limit).await
        }
        None => analyze(domains, state.resolver.as_ref(), &state.providers).await,
    };
    log::info!(
        "Analyzed {} domain{} in {:.2}s",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        started.elapsed().as_secs_f64()
    );
    results
}

/// `POST /api/analyze-domains`
pub async fn analyze_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let domains = match parse_domains(&body) {
        Ok(domains) => domains,
        Err(e) => {
            log::debug!("Rejected analyze request: {}", e.reason);
            return e.into_response();
        }
    };

    let results = run_batch(&state, &domains).await;
    (StatusCode::OK, Json(AnalyzeResponse { results })).into_response()
}

/// `POST /api/analyze-domains/csv`
pub async fn analyze_csv_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let domains = match parse_domains(&body) {
        Ok(domains) => domains,
        Err(e) => {
            log::debug!("Rejected CSV request: {}", e.reason);
            return e.into_response();
        }
    };

    let results = run_batch(&state, &domains).await;
    match results_to_csv(&results) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{CSV_DOWNLOAD_FILENAME}\""),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to render CSV: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render CSV: {e}"),
            )
                .into_response()
        }
    }
}

/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /health`
pub async fn health_handler() -> &'static str {
    "ok"
}
