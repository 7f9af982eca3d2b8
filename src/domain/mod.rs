//! Domain normalization.
//!
//! Converts raw user-supplied strings into canonical hosts for probing.
//! Callers paste all sorts of things into the domain list — full URLs, hosts
//! with ports, trailing paths — and all of them should probe the same host.

/// Normalizes a raw domain string into a bare lowercase hostname.
///
/// Steps, in order:
/// 1. Trim surrounding whitespace
/// 2. Strip a leading `http://` or `https://` (exact, case-sensitive prefix)
/// 3. Truncate at the first `/` (discard path)
/// 4. Truncate at the first `:` (discard port)
/// 5. Lowercase the remainder
///
/// No hostname syntax validation happens here: malformed input flows through
/// and surfaces as a resolution or HTTP failure downstream, never as an
/// upfront rejection. Idempotent on its own output.
pub fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);
    let without_path = without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme);
    let without_port = without_path.split(':').next().unwrap_or(without_path);
    without_port.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_host;

    #[test]
    fn test_strips_scheme_path_and_query() {
        assert_eq!(normalize_host("https://Example.COM/path?x=1"), "example.com");
        assert_eq!(normalize_host("http://example.com/"), "example.com");
    }

    #[test]
    fn test_strips_port() {
        assert_eq!(normalize_host("example.com:8080"), "example.com");
        assert_eq!(normalize_host("https://example.com:443/login"), "example.com");
    }

    #[test]
    fn test_trims_whitespace_and_lowercases() {
        assert_eq!(normalize_host("  EXAMPLE.com  "), "example.com");
        assert_eq!(normalize_host("\tSub.Domain.ORG\n"), "sub.domain.org");
    }

    #[test]
    fn test_bare_host_unchanged() {
        assert_eq!(normalize_host("example.com"), "example.com");
    }

    #[test]
    fn test_scheme_prefix_match_is_case_sensitive() {
        // Only the exact lowercase prefixes are recognized as schemes; anything
        // else is left in place and fails downstream instead.
        assert_eq!(normalize_host("HTTPS://example.com"), "https");
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(normalize_host("not a domain"), "not a domain");
        assert_eq!(normalize_host(""), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "https://Example.COM/path?x=1",
            "example.com:8080",
            "  weird input  ",
            "sub.domain.org",
        ] {
            let once = normalize_host(raw);
            assert_eq!(normalize_host(&once), once);
        }
    }
}
