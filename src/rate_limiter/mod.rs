//! Per-caller sliding-window rate limiting.
//!
//! Tracks request counts per caller identity (typically the originating IP)
//! over a fixed window. State lives in process memory for the lifetime of the
//! process; nothing is persisted across restarts.
//!
//! The per-caller read-modify-write happens under a single mutex, so two
//! concurrent requests racing for the last slot can never both be admitted.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;

/// One caller's window: how many requests were admitted and when the window
/// rolls over. Reset lazily on the first admit after expiry.
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_time: i64,
}

/// Outcome of an admission check, returned to the route layer and echoed to
/// the caller as rate-limit metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Requests left in the current window (0 when rejected).
    pub remaining: u32,
    /// Epoch milliseconds at which the window resets.
    pub reset_time: i64,
}

/// Fixed-window rate limiter keyed by caller identity.
///
/// The window table grows with the number of distinct callers; expired
/// entries are reclaimed by [`RateLimiter::sweep_expired`], which the server
/// runs periodically in the background.
pub struct RateLimiter {
    max_requests: u32,
    window_millis: i64,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per caller per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window_millis: window.as_millis() as i64,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admission check against the wall clock.
    pub fn admit(&self, caller: &str) -> RateLimitDecision {
        self.admit_at(caller, Utc::now().timestamp_millis())
    }

    /// Admission check at an explicit time (epoch milliseconds).
    ///
    /// Separated from [`admit`](Self::admit) so tests can drive the clock.
    /// A rejected request does not increment the count.
    pub fn admit_at(&self, caller: &str, now: i64) -> RateLimitDecision {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let window = windows
            .entry(caller.to_string())
            .or_insert(Window {
                count: 0,
                reset_time: now + self.window_millis,
            });

        if now > window.reset_time {
            window.count = 0;
            window.reset_time = now + self.window_millis;
        }

        if window.count >= self.max_requests {
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_time: window.reset_time,
            };
        }

        window.count += 1;
        RateLimitDecision {
            allowed: true,
            remaining: self.max_requests - window.count,
            reset_time: window.reset_time,
        }
    }

    /// Removes windows that expired before `now`, returning how many were
    /// dropped. Correctness does not depend on this; it only bounds memory
    /// when many distinct callers come and go.
    pub fn sweep_expired_at(&self, now: i64) -> usize {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = windows.len();
        windows.retain(|_, w| now <= w.reset_time);
        before - windows.len()
    }

    /// Removes windows that expired before the current wall-clock time.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now().timestamp_millis())
    }
}
