//! Error handling.
//!
//! Runtime failures are deliberately scarce in this service: probe-level
//! network failures are absorbed as "no evidence" inside the probes, and a
//! classification failure is contained to its own domain's result. What
//! remains here are startup failures, which are fatal and typed.

mod types;

pub use types::InitializationError;
