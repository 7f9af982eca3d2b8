//! IP-membership probe backed by DNS resolution.
//!
//! Resolves a host's IPv4 A records with `hickory-resolver` and tests each
//! address against the static blocked-IP set. Filtering regimes commonly
//! answer blocked domains with the address of an interstitial server, so a
//! single matching A record is sufficient evidence.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::models::{BlockSignal, ProbeOutcome};
use crate::probes::IpBlockProbe;

/// Production [`IpBlockProbe`] using a shared async resolver.
pub struct DnsIpProbe {
    resolver: Arc<TokioAsyncResolver>,
    blocked_ips: Arc<HashSet<Ipv4Addr>>,
}

impl DnsIpProbe {
    /// Creates a probe over `resolver` checking against `blocked_ips`.
    pub fn new(resolver: Arc<TokioAsyncResolver>, blocked_ips: Arc<HashSet<Ipv4Addr>>) -> Self {
        DnsIpProbe {
            resolver,
            blocked_ips,
        }
    }
}

#[async_trait]
impl IpBlockProbe for DnsIpProbe {
    async fn check(&self, host: &str) -> ProbeOutcome {
        // NXDOMAIN, timeouts, and every other DNS failure mean "no IP
        // evidence", not "error": an unresolvable domain may still serve a
        // block page over HTTP, and the classifier continues there.
        let lookup = match self.resolver.ipv4_lookup(host).await {
            Ok(lookup) => lookup,
            Err(e) => {
                debug!("DNS resolution failed for {host}: {e}");
                return ProbeOutcome::NoEvidence;
            }
        };

        for record in lookup.iter() {
            let ip = record.0;
            if self.blocked_ips.contains(&ip) {
                debug!("{host} resolves to blocked IP {ip}");
                return ProbeOutcome::Evidence(BlockSignal::IpMatch(ip));
            }
        }

        ProbeOutcome::NoEvidence
    }
}
