//! Route-layer request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::models::DomainCheckResult;

/// JSON body of `POST /check`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Ordered list of raw domain strings to classify.
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Query parameters of `GET /check`.
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    /// Comma-separated raw domain strings.
    pub domains: Option<String>,
}

/// Caller-facing response envelope: `{ results, remaining, resetTime }`,
/// with `error` added on rate-limit rejection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// Present only on rejection responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// One result per input domain, in input order.
    pub results: Vec<DomainCheckResult>,
    /// Requests left in the caller's current window.
    pub remaining: u32,
    /// Epoch milliseconds at which the caller's window resets.
    pub reset_time: i64,
}

/// Plain error envelope for validation rejections.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable rejection reason.
    pub error: String,
}
