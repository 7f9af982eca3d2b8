//! HTTP route layer.
//!
//! Thin transport wrapper around the core: extracts the caller identity and
//! domain list, gates on the rate limiter, delegates to the checker, and
//! serializes the response envelope. No classification decisions are made
//! here.
//!
//! Endpoints:
//! - `POST /check` - JSON body `{ "domains": [...] }`
//! - `GET /check?domains=a.com,b.com` - comma-separated query form
//! - `GET /health` - liveness probe

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use log::{debug, info};
use tower_http::cors::CorsLayer;

use crate::checker::DomainChecker;
use crate::config::SWEEP_INTERVAL;
use crate::rate_limiter::RateLimiter;

use handlers::{check_get, check_post, health};
pub use types::{CheckRequest, CheckResponse, ErrorResponse};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The domain classifier and batch orchestrator.
    pub checker: Arc<DomainChecker>,
    /// Per-caller rate-limit windows.
    pub limiter: Arc<RateLimiter>,
}

/// Builds the application router over `state`.
///
/// CORS is permissive: the service is meant to be called from arbitrary
/// web frontends.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/check", post(check_post).get(check_get))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `port` and serves requests until the process exits.
///
/// Also spawns the background sweep of expired rate-limit windows so the
/// caller table does not grow without bound.
pub async fn serve(port: u16, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("blockcheck listening on port {port}");

    let limiter = Arc::clone(&state.limiter);
    let sweeper = tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        interval.tick().await; // first tick fires immediately, nothing to sweep yet
        loop {
            interval.tick().await;
            let dropped = limiter.sweep_expired();
            if dropped > 0 {
                debug!("Swept {dropped} expired rate-limit windows");
            }
        }
    });

    let result = axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error");

    sweeper.abort();
    result
}
