//! HTTP request handlers.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;

use super::types::{CheckQuery, CheckRequest, CheckResponse, ErrorResponse};
use super::AppState;

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /check` with a JSON body.
pub async fn check_post(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<CheckRequest>,
) -> Response {
    let caller = caller_identity(&headers, addr);
    handle_check(state, caller, body.domains).await
}

/// `GET /check?domains=a.com,b.com` with a comma-separated list.
pub async fn check_get(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<CheckQuery>,
) -> Response {
    let caller = caller_identity(&headers, addr);
    let domains = query
        .domains
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();
    handle_check(state, caller, domains).await
}

/// Shared admission + classification path for both transports.
async fn handle_check(state: AppState, caller: String, domains: Vec<String>) -> Response {
    let rate = state.limiter.admit(&caller);
    if !rate.allowed {
        info!("Rate limit exceeded for {caller}");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(CheckResponse {
                error: Some("Rate limit exceeded".to_string()),
                results: Vec::new(),
                remaining: 0,
                reset_time: rate.reset_time,
            }),
        )
            .into_response();
    }

    if domains.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No domains provided".to_string(),
            }),
        )
            .into_response();
    }

    info!("Checking {} domain(s) for {caller}", domains.len());
    let results = state.checker.check_all(&domains).await;

    Json(CheckResponse {
        error: None,
        results,
        remaining: rate.remaining,
        reset_time: rate.reset_time,
    })
    .into_response()
}

/// Resolves the caller identity used for rate-limit accounting.
///
/// The first entry of `x-forwarded-for` wins so the limiter keys on the
/// originating client when the service sits behind a proxy; otherwise the
/// peer address is used.
fn caller_identity(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| addr.ip().to_string())
}
