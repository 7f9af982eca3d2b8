//! Domain classification and batch orchestration.
//!
//! [`DomainChecker::classify`] runs the per-domain pipeline: normalize, IP
//! probe, then HTTP probes over each scheme until one reports evidence.
//! [`DomainChecker::check_all`] fans a batch out as concurrent tasks and
//! collects results in input order.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};

use crate::config::PROBE_SCHEMES;
use crate::domain::normalize_host;
use crate::models::{DomainCheckResult, ProbeOutcome};
use crate::probes::{HttpBlockProbe, IpBlockProbe};

/// Classifies domains as blocked or not using the configured probes.
///
/// Holds no mutable state; every classification is local to its own task, so
/// a single checker is shared freely across concurrent batches.
pub struct DomainChecker {
    ip_probe: Arc<dyn IpBlockProbe>,
    http_probe: Arc<dyn HttpBlockProbe>,
}

impl DomainChecker {
    /// Creates a checker over the given probe implementations.
    pub fn new(ip_probe: Arc<dyn IpBlockProbe>, http_probe: Arc<dyn HttpBlockProbe>) -> Self {
        DomainChecker {
            ip_probe,
            http_probe,
        }
    }

    /// Classifies one raw domain string.
    ///
    /// IP evidence short-circuits HTTP probing entirely: once a domain
    /// resolves to a blocked address, probing its web server adds nothing.
    /// Otherwise the schemes in [`PROBE_SCHEMES`] are tried in order,
    /// stopping at the first that reports evidence.
    ///
    /// Probe-level network failures are absorbed inside the probes and can
    /// only ever produce a not-blocked verdict, never an error result.
    pub async fn classify(&self, raw: &str) -> DomainCheckResult {
        let host = normalize_host(raw);

        if let ProbeOutcome::Evidence(signal) = self.ip_probe.check(&host).await {
            debug!("{host}: blocked ({signal:?})");
            return DomainCheckResult::blocked(raw);
        }

        for scheme in PROBE_SCHEMES {
            let url = format!("{scheme}://{host}");
            if let ProbeOutcome::Evidence(signal) = self.http_probe.check(&url).await {
                debug!("{host}: blocked ({signal:?})");
                return DomainCheckResult::blocked(raw);
            }
        }

        debug!("{host}: not blocked");
        DomainCheckResult::not_blocked(raw)
    }

    /// Classifies a batch of domains concurrently.
    ///
    /// Every domain gets its own task and all run at once; no global cap is
    /// imposed on the fan-out within a batch. Results come back positionally
    /// aligned with the input regardless of completion order, and a failure
    /// in one domain's task (a panic) maps to an error result for that
    /// domain only, leaving its siblings untouched.
    pub async fn check_all(self: &Arc<Self>, domains: &[String]) -> Vec<DomainCheckResult> {
        let handles: Vec<_> = domains
            .iter()
            .map(|raw| {
                let checker = Arc::clone(self);
                let raw = raw.clone();
                tokio::spawn(async move { checker.classify(&raw).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(domains)
            .map(|(joined, raw)| match joined {
                Ok(result) => result,
                Err(e) => {
                    warn!("classification task for {raw} failed: {e}");
                    DomainCheckResult::error(raw, e.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::models::{BlockSignal, DomainStatus};

    /// IP probe double returning a fixed outcome and counting calls.
    struct FakeIpProbe {
        outcome: ProbeOutcome,
        calls: AtomicUsize,
    }

    impl FakeIpProbe {
        fn evidence() -> Self {
            FakeIpProbe {
                outcome: ProbeOutcome::Evidence(BlockSignal::IpMatch(
                    "180.178.101.216".parse().unwrap(),
                )),
                calls: AtomicUsize::new(0),
            }
        }

        fn no_evidence() -> Self {
            FakeIpProbe {
                outcome: ProbeOutcome::NoEvidence,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IpBlockProbe for FakeIpProbe {
        async fn check(&self, _host: &str) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// HTTP probe double that answers per-URL and counts calls.
    struct FakeHttpProbe {
        responses: Box<dyn Fn(&str) -> ProbeOutcome + Send + Sync>,
        calls: AtomicUsize,
        delay_for: Option<String>,
    }

    impl FakeHttpProbe {
        fn with(responses: impl Fn(&str) -> ProbeOutcome + Send + Sync + 'static) -> Self {
            FakeHttpProbe {
                responses: Box::new(responses),
                calls: AtomicUsize::new(0),
                delay_for: None,
            }
        }

        fn never_called() -> Self {
            Self::with(|_| ProbeOutcome::NoEvidence)
        }
    }

    #[async_trait]
    impl HttpBlockProbe for FakeHttpProbe {
        async fn check(&self, url: &str) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(slow) = &self.delay_for {
                if url.contains(slow.as_str()) {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
            (self.responses)(url)
        }
    }

    fn checker(ip: FakeIpProbe, http: FakeHttpProbe) -> (Arc<DomainChecker>, Arc<FakeIpProbe>, Arc<FakeHttpProbe>) {
        let ip = Arc::new(ip);
        let http = Arc::new(http);
        let checker = Arc::new(DomainChecker::new(
            Arc::clone(&ip) as Arc<dyn IpBlockProbe>,
            Arc::clone(&http) as Arc<dyn HttpBlockProbe>,
        ));
        (checker, ip, http)
    }

    #[tokio::test]
    async fn test_ip_evidence_skips_http_probing() {
        let (checker, _ip, http) = checker(FakeIpProbe::evidence(), FakeHttpProbe::never_called());

        let result = checker.classify("example.com").await;

        assert!(result.blocked);
        assert_eq!(result.status, DomainStatus::Blocked);
        assert!(!result.error);
        assert_eq!(http.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_http_scheme_short_circuit() {
        // 403 on the http scheme: the https scheme must never be attempted
        let (checker, _ip, http) = checker(
            FakeIpProbe::no_evidence(),
            FakeHttpProbe::with(|url| {
                if url.starts_with("http://") {
                    ProbeOutcome::Evidence(BlockSignal::HttpStatus(403))
                } else {
                    panic!("https probe should have been short-circuited")
                }
            }),
        );

        let result = checker.classify("example.com").await;

        assert!(result.blocked);
        assert_eq!(http.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_https_fallback_when_http_inconclusive() {
        let (checker, _ip, http) = checker(
            FakeIpProbe::no_evidence(),
            FakeHttpProbe::with(|url| {
                if url.starts_with("https://") {
                    ProbeOutcome::Evidence(BlockSignal::Keyword("site blocked".into()))
                } else {
                    ProbeOutcome::NoEvidence
                }
            }),
        );

        let result = checker.classify("example.com").await;

        assert!(result.blocked);
        assert_eq!(http.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_all_probes_inconclusive_is_not_an_error() {
        // Both probes absorbing network failures look identical to "no
        // evidence"; the verdict must be Not Blocked, not Error.
        let (checker, ip, http) = checker(FakeIpProbe::no_evidence(), FakeHttpProbe::never_called());

        let result = checker.classify("unreachable.invalid").await;

        assert!(!result.blocked);
        assert_eq!(result.status, DomainStatus::NotBlocked);
        assert!(!result.error);
        assert_eq!(ip.calls.load(Ordering::SeqCst), 1);
        assert_eq!(http.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_classify_normalizes_but_echoes_raw_input() {
        let (checker, _ip, _http) =
            checker(FakeIpProbe::evidence(), FakeHttpProbe::never_called());

        let result = checker.classify("  https://Example.COM/path  ").await;
        assert_eq!(result.original_url, "  https://Example.COM/path  ");
    }

    #[tokio::test]
    async fn test_check_all_preserves_input_order() {
        // b.com is made the slowest; output order must still match input
        let ip = Arc::new(FakeIpProbe::no_evidence());
        let http = Arc::new(FakeHttpProbe {
            responses: Box::new(|_| ProbeOutcome::NoEvidence),
            calls: AtomicUsize::new(0),
            delay_for: Some("b.com".to_string()),
        });
        let checker = Arc::new(DomainChecker::new(
            ip as Arc<dyn IpBlockProbe>,
            http as Arc<dyn HttpBlockProbe>,
        ));

        let domains = vec![
            "a.com".to_string(),
            "b.com".to_string(),
            "c.com".to_string(),
        ];
        let results = checker.check_all(&domains).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].original_url, "a.com");
        assert_eq!(results[1].original_url, "b.com");
        assert_eq!(results[2].original_url, "c.com");
    }

    #[tokio::test]
    async fn test_check_all_isolates_panicking_task() {
        // A panic inside one domain's classification becomes an Error result
        // for that domain; its siblings classify normally.
        struct PanickyIpProbe;

        #[async_trait]
        impl IpBlockProbe for PanickyIpProbe {
            async fn check(&self, host: &str) -> ProbeOutcome {
                if host == "boom.com" {
                    panic!("injected failure");
                }
                ProbeOutcome::NoEvidence
            }
        }

        let checker = Arc::new(DomainChecker::new(
            Arc::new(PanickyIpProbe) as Arc<dyn IpBlockProbe>,
            Arc::new(FakeHttpProbe::never_called()) as Arc<dyn HttpBlockProbe>,
        ));

        let domains = vec!["a.com".to_string(), "boom.com".to_string(), "c.com".to_string()];
        let results = checker.check_all(&domains).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, DomainStatus::NotBlocked);
        assert_eq!(results[1].status, DomainStatus::Error);
        assert!(results[1].error);
        assert!(!results[1].blocked);
        assert_eq!(results[2].status, DomainStatus::NotBlocked);
    }

    #[tokio::test]
    async fn test_check_all_empty_batch() {
        let (checker, _ip, _http) =
            checker(FakeIpProbe::no_evidence(), FakeHttpProbe::never_called());
        let results = checker.check_all(&[]).await;
        assert!(results.is_empty());
    }
}
