//! Block-evidence probes.
//!
//! Two independent signals feed the classifier:
//! - [`dns`]: resolved-IPv4 membership in the blocked-IP set
//! - [`http`]: HTTP response inspection (status code or body keyword)
//!
//! Both are behind traits so the classifier can be exercised with test
//! doubles, and both absorb network failures as [`ProbeOutcome::NoEvidence`]
//! rather than surfacing errors.

mod dns;
mod http;

use async_trait::async_trait;

use crate::models::ProbeOutcome;

pub use dns::DnsIpProbe;
pub use http::ReqwestHttpProbe;

/// Checks whether a host resolves to a blocked IP address.
#[async_trait]
pub trait IpBlockProbe: Send + Sync {
    /// Resolves `host` and tests the addresses against the blocked-IP set.
    /// Resolution failure is `NoEvidence`, never an error.
    async fn check(&self, host: &str) -> ProbeOutcome;
}

/// Checks whether a URL serves a block-indicating HTTP response.
#[async_trait]
pub trait HttpBlockProbe: Send + Sync {
    /// Issues a GET to `url` and inspects status code and body.
    /// Any network-level failure is `NoEvidence`, never an error.
    async fn check(&self, url: &str) -> ProbeOutcome;
}
