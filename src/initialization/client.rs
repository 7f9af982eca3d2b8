//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the HTTP client used by the HTTP probe.
///
/// Creates a `reqwest::Client` configured with:
/// - The per-probe timeout (covers connect through body read)
/// - Redirect following enabled (reqwest's default 10-hop policy); block
///   pages are frequently reached via a redirect from the probed host
///
/// # Arguments
///
/// * `probe_timeout` - Overall timeout applied to every probe request
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(probe_timeout: Duration) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new().timeout(probe_timeout).build()?;
    Ok(Arc::new(client))
}
