//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and the immutable block-list configuration.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BLOCKED_IPS, DEFAULT_BLOCK_KEYWORDS, DEFAULT_PORT, HTTP_PROBE_TIMEOUT, MAX_REQUESTS,
    WINDOW_DURATION,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, parsed from the command line.
///
/// Every value is fixed at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "blockcheck",
    about = "HTTP service that checks whether domains are blocked by censorship filtering"
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Rate-limit window length in seconds
    #[arg(long, default_value_t = WINDOW_DURATION.as_secs())]
    pub window_secs: u64,

    /// Maximum requests per caller per window
    #[arg(long, default_value_t = MAX_REQUESTS)]
    pub max_requests: u32,

    /// Per-probe HTTP timeout in seconds
    #[arg(long, default_value_t = HTTP_PROBE_TIMEOUT.as_secs())]
    pub probe_timeout_secs: u64,

    /// File with blocked IPv4 addresses, one per line (defaults compiled in)
    #[arg(long)]
    pub block_ips_file: Option<PathBuf>,

    /// File with block keywords, one per line (defaults compiled in)
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            window_secs: WINDOW_DURATION.as_secs(),
            max_requests: MAX_REQUESTS,
            probe_timeout_secs: HTTP_PROBE_TIMEOUT.as_secs(),
            block_ips_file: None,
            keywords_file: None,
        }
    }
}

/// Static block lists used by the probes.
///
/// Loaded once at startup and immutable thereafter. Keywords are stored
/// lowercase so body matching is a plain substring test.
#[derive(Debug, Clone)]
pub struct BlockListConfig {
    /// IPv4 addresses whose presence in a domain's A records marks it blocked.
    pub blocked_ips: HashSet<Ipv4Addr>,
    /// Lowercase substrings that mark a response body as an interstitial page.
    pub keywords: Vec<String>,
}

impl BlockListConfig {
    /// Builds the compiled-in default block lists.
    pub fn defaults() -> Self {
        BlockListConfig {
            blocked_ips: DEFAULT_BLOCKED_IPS
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect(),
            keywords: DEFAULT_BLOCK_KEYWORDS
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.window_secs, 600);
        assert_eq!(config.max_requests, MAX_REQUESTS);
        assert_eq!(config.probe_timeout_secs, 8);
        assert!(config.block_ips_file.is_none());
    }

    #[test]
    fn test_default_block_lists_parse() {
        let lists = BlockListConfig::defaults();
        // All four compiled-in addresses must parse
        assert_eq!(lists.blocked_ips.len(), DEFAULT_BLOCKED_IPS.len());
        assert!(lists
            .blocked_ips
            .contains(&"180.178.101.216".parse().unwrap()));
        assert_eq!(lists.keywords.len(), DEFAULT_BLOCK_KEYWORDS.len());
        // Keywords are stored lowercase
        assert!(lists.keywords.iter().all(|k| k == &k.to_lowercase()));
    }
}
