//! blockcheck library: domain block-check service core
//!
//! This library decides whether domains are blocked by a censorship or
//! filtering regime, using two independent signals per domain:
//!
//! - **IP evidence**: the domain's IPv4 A records intersect a known set of
//!   addresses hosting censorship interstitial pages
//! - **HTTP evidence**: probing `http://` and `https://` yields a 403/451
//!   status or a response body containing a known block keyword
//!
//! Batches of domains are classified concurrently with results returned in
//! input order, and callers are gated by a sliding-window rate limiter.
//!
//! # Example
//!
//! ```no_run
//! use blockcheck::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! run(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod domain;
mod error_handling;
pub mod initialization;
pub mod models;
pub mod probes;
pub mod rate_limiter;
pub mod server;

// Re-export public API
pub use checker::DomainChecker;
pub use config::{BlockListConfig, Config, LogFormat, LogLevel};
pub use error_handling::InitializationError;
pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use run::run;
pub use server::AppState;

// Internal run module (wires resources together and starts the server)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::info;

    use crate::checker::DomainChecker;
    use crate::config::Config;
    use crate::initialization::{init_client, init_resolver, load_block_lists};
    use crate::probes::{DnsIpProbe, ReqwestHttpProbe};
    use crate::rate_limiter::RateLimiter;
    use crate::server::{serve, AppState};

    /// Builds all shared resources from `config` and serves requests until
    /// the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the block lists cannot be loaded, the HTTP client
    /// cannot be built, or the listening port cannot be bound.
    pub async fn run(config: Config) -> Result<()> {
        let block_lists = load_block_lists(&config).context("Failed to load block lists")?;
        info!(
            "Block lists: {} IPs, {} keywords",
            block_lists.blocked_ips.len(),
            block_lists.keywords.len()
        );

        let client = init_client(Duration::from_secs(config.probe_timeout_secs))
            .context("Failed to initialize HTTP client")?;
        let resolver = init_resolver();

        let ip_probe = DnsIpProbe::new(resolver, Arc::new(block_lists.blocked_ips));
        let http_probe = ReqwestHttpProbe::new(client, Arc::new(block_lists.keywords));
        let checker = Arc::new(DomainChecker::new(Arc::new(ip_probe), Arc::new(http_probe)));

        let limiter = Arc::new(RateLimiter::new(
            config.max_requests,
            Duration::from_secs(config.window_secs),
        ));

        serve(config.port, AppState { checker, limiter }).await
    }
}
