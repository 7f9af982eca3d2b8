//! Block-list loading.
//!
//! The blocked-IP set and keyword set default to the compiled-in constants
//! and can each be replaced by a plain-text file: one entry per line, blank
//! lines and `#` comments skipped.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::path::Path;

use log::info;

use crate::config::{BlockListConfig, Config};
use crate::error_handling::InitializationError;

/// Builds the block-list configuration from `config`, reading the optional
/// override files.
///
/// # Errors
///
/// Returns `InitializationError::BlockListError` if a file cannot be read or
/// contains an unparseable IPv4 address. A malformed list is a startup
/// failure, not something to silently skip entries from.
pub fn load_block_lists(config: &Config) -> Result<BlockListConfig, InitializationError> {
    let defaults = BlockListConfig::defaults();

    let blocked_ips = match &config.block_ips_file {
        Some(path) => {
            let ips = load_ip_file(path)?;
            info!("Loaded {} blocked IPs from {}", ips.len(), path.display());
            ips
        }
        None => defaults.blocked_ips,
    };

    let keywords = match &config.keywords_file {
        Some(path) => {
            let keywords = load_keyword_file(path)?;
            info!(
                "Loaded {} block keywords from {}",
                keywords.len(),
                path.display()
            );
            keywords
        }
        None => defaults.keywords,
    };

    Ok(BlockListConfig {
        blocked_ips,
        keywords,
    })
}

fn read_entries(path: &Path) -> Result<Vec<String>, InitializationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        InitializationError::BlockListError(format!("failed to read {}: {e}", path.display()))
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn load_ip_file(path: &Path) -> Result<HashSet<Ipv4Addr>, InitializationError> {
    read_entries(path)?
        .iter()
        .map(|entry| {
            entry.parse().map_err(|_| {
                InitializationError::BlockListError(format!(
                    "invalid IPv4 address {entry:?} in {}",
                    path.display()
                ))
            })
        })
        .collect()
}

fn load_keyword_file(path: &Path) -> Result<Vec<String>, InitializationError> {
    Ok(read_entries(path)?
        .into_iter()
        .map(|kw| kw.to_lowercase())
        .collect())
}
