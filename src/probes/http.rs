//! HTTP response inspection probe.
//!
//! Issues a GET with redirect following and classifies the response: a 403 or
//! 451 status is block evidence on its own, otherwise the body is scanned for
//! the configured block keywords.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::models::{BlockSignal, ProbeOutcome};
use crate::probes::HttpBlockProbe;

/// Status codes that mark a response as blocked regardless of body content.
///
/// 451 Unavailable For Legal Reasons is the explicit censorship status;
/// 403 is what most filtering middleboxes actually return.
const BLOCK_STATUS_CODES: [u16; 2] = [403, 451];

/// Production [`HttpBlockProbe`] backed by a shared `reqwest` client.
///
/// The client is expected to be built with the probe timeout and redirect
/// policy already configured (see `initialization::init_client`).
pub struct ReqwestHttpProbe {
    client: Arc<reqwest::Client>,
    keywords: Arc<Vec<String>>,
}

impl ReqwestHttpProbe {
    /// Creates a probe using `client`, scanning bodies for `keywords`.
    /// Keywords must already be lowercase.
    pub fn new(client: Arc<reqwest::Client>, keywords: Arc<Vec<String>>) -> Self {
        ReqwestHttpProbe { client, keywords }
    }
}

#[async_trait]
impl HttpBlockProbe for ReqwestHttpProbe {
    async fn check(&self, url: &str) -> ProbeOutcome {
        // Timeouts, refused connections, TLS failures: all inconclusive.
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("HTTP probe failed for {url}: {e}");
                return ProbeOutcome::NoEvidence;
            }
        };

        let status = response.status().as_u16();
        if BLOCK_STATUS_CODES.contains(&status) {
            debug!("{url} answered with block status {status}");
            return ProbeOutcome::Evidence(BlockSignal::HttpStatus(status));
        }

        // Best effort: a body that cannot be read degrades to an empty body,
        // which simply matches no keyword.
        let body = response.text().await.unwrap_or_default().to_lowercase();
        for keyword in self.keywords.iter() {
            if body.contains(keyword.as_str()) {
                debug!("{url} body matched block keyword {keyword:?}");
                return ProbeOutcome::Evidence(BlockSignal::Keyword(keyword.clone()));
            }
        }

        ProbeOutcome::NoEvidence
    }
}
