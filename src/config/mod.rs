//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (window size, timeouts, default block lists)
//! - CLI option types and parsing
//! - The immutable block-list configuration handed to the probes

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BlockListConfig, Config, LogFormat, LogLevel};
