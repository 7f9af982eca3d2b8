//! Configuration constants.
//!
//! Defaults for rate limiting, probing, and the compiled-in block lists.
//! Everything here can be overridden at startup via CLI flags or list files;
//! the constants are the values used when nothing else is supplied.

use std::time::Duration;

/// Rate-limit window duration (10 minutes).
pub const WINDOW_DURATION: Duration = Duration::from_secs(10 * 60);
/// Maximum requests per caller per window.
pub const MAX_REQUESTS: u32 = 1000;

/// Per-probe HTTP request timeout.
///
/// Each HTTP probe carries its own timeout; there is no batch-wide timeout.
/// A slow probe delays only its own domain's branch of the batch.
pub const HTTP_PROBE_TIMEOUT: Duration = Duration::from_secs(8);

/// DNS query timeout in seconds.
/// Most queries complete in under a second; 3s fails fast on unresponsive
/// DNS servers without giving up on slow-but-working ones.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Schemes tried by the HTTP probe, in order, short-circuiting on the first
/// that reports block evidence.
pub const PROBE_SCHEMES: [&str; 2] = ["http", "https"];

/// Default listening port (overridable via `--port` or `PORT`).
pub const DEFAULT_PORT: u16 = 3000;

/// Interval between sweeps of expired rate-limit windows.
///
/// The sweep is a resource mitigation, not a correctness requirement: an
/// unswept table only grows, it never mis-counts.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// IPv4 addresses known to host censorship interstitial pages.
///
/// These are the addresses the national filtering DNS resolvers answer with
/// for blocked domains. Used as the default blocked-IP set when no
/// `--block-ips-file` is supplied.
pub const DEFAULT_BLOCKED_IPS: [&str; 4] = [
    "180.178.101.216",
    "180.178.101.217",
    "36.37.64.13",
    "36.37.64.14",
];

/// Substrings whose presence in a response body indicates a censorship
/// interstitial page. Matched case-insensitively. Used as the default
/// keyword set when no `--keywords-file` is supplied.
pub const DEFAULT_BLOCK_KEYWORDS: [&str; 6] = [
    "internet positif",
    "internet sehat",
    "nawala",
    "trust positif",
    "situs ini diblokir",
    "site blocked",
];
