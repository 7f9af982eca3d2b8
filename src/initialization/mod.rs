//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (redirect following, probe timeout)
//! - DNS resolver
//! - Logger
//! - Block lists (compiled-in defaults or files)
//!
//! All initialization functions return proper error types for error handling.

mod blocklist;
mod client;
mod logger;
mod resolver;

// Re-export public API
pub use blocklist::load_block_lists;
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
