//! Shared data types for domain block checking.
//!
//! These types flow between the probes, the classifier, and the HTTP route
//! layer. Result types serialize with the field names and status strings the
//! caller-facing JSON API uses.

use std::net::Ipv4Addr;

use serde::Serialize;

/// Evidence that contributed to a blocked verdict.
///
/// Produced transiently by the probes during classification; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSignal {
    /// A resolved IPv4 address matched the blocked-IP set.
    IpMatch(Ipv4Addr),
    /// The HTTP response carried a block-indicating status code (403 or 451).
    HttpStatus(u16),
    /// A configured block keyword was found in the response body.
    Keyword(String),
}

/// Outcome of a single probe attempt.
///
/// Probes deliberately have no error variant: a network-level failure
/// (DNS timeout, connection refused, TLS error) carries no information about
/// blocking and is absorbed as `NoEvidence`. Only the classifier pipeline
/// itself can produce an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe found block evidence.
    Evidence(BlockSignal),
    /// The probe found nothing, or failed at the network level.
    NoEvidence,
}

impl ProbeOutcome {
    /// Returns `true` if this outcome carries block evidence.
    pub fn is_evidence(&self) -> bool {
        matches!(self, ProbeOutcome::Evidence(_))
    }
}

/// Final classification for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DomainStatus {
    /// No block evidence from either probe.
    #[serde(rename = "Not Blocked")]
    NotBlocked,
    /// IP or HTTP evidence found.
    Blocked,
    /// The classification pipeline failed unexpectedly.
    #[serde(rename = "Error checking")]
    Error,
}

/// One per input domain, order-preserving with the input list.
///
/// Immutable once returned by the classifier. Serializes to the wire shape
/// `{ originalUrl, blocked, status, error, detail? }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCheckResult {
    /// The raw caller-supplied input, echoed back untouched.
    pub original_url: String,
    /// Whether any block evidence was found.
    pub blocked: bool,
    /// Human-readable verdict.
    pub status: DomainStatus,
    /// True only when the classification pipeline itself failed.
    pub error: bool,
    /// Optional failure detail, present only on error results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DomainCheckResult {
    /// Builds a not-blocked result for `raw`.
    pub fn not_blocked(raw: &str) -> Self {
        DomainCheckResult {
            original_url: raw.to_string(),
            blocked: false,
            status: DomainStatus::NotBlocked,
            error: false,
            detail: None,
        }
    }

    /// Builds a blocked result for `raw`.
    pub fn blocked(raw: &str) -> Self {
        DomainCheckResult {
            original_url: raw.to_string(),
            blocked: true,
            status: DomainStatus::Blocked,
            error: false,
            detail: None,
        }
    }

    /// Builds an error result for `raw`.
    ///
    /// This is the only path that produces [`DomainStatus::Error`]; probe-level
    /// network failures never do.
    pub fn error(raw: &str, detail: impl Into<String>) -> Self {
        DomainCheckResult {
            original_url: raw.to_string(),
            blocked: false,
            status: DomainStatus::Error,
            error: true,
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&DomainStatus::NotBlocked).unwrap(),
            "\"Not Blocked\""
        );
        assert_eq!(
            serde_json::to_string(&DomainStatus::Blocked).unwrap(),
            "\"Blocked\""
        );
        assert_eq!(
            serde_json::to_string(&DomainStatus::Error).unwrap(),
            "\"Error checking\""
        );
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = DomainCheckResult::blocked("https://Example.COM/path");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalUrl"], "https://Example.COM/path");
        assert_eq!(json["blocked"], true);
        assert_eq!(json["status"], "Blocked");
        assert_eq!(json["error"], false);
        // detail is omitted entirely when absent
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_error_result_carries_detail() {
        let result = DomainCheckResult::error("a.com", "task panicked");
        assert!(result.error);
        assert!(!result.blocked);
        assert_eq!(result.status, DomainStatus::Error);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "Error checking");
        assert_eq!(json["detail"], "task panicked");
    }

    #[test]
    fn test_probe_outcome_is_evidence() {
        assert!(ProbeOutcome::Evidence(BlockSignal::HttpStatus(403)).is_evidence());
        assert!(!ProbeOutcome::NoEvidence.is_evidence());
    }
}
