//! Process-wide shutdown coordination.
//! The ctrl-c handler sets a one-way flag; the dedupe walk polls it between
//! files so a long run can stop at a clean per-file boundary.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag, and `request()`
//! is safe to call from a signal handler.

use std::sync::atomic::{AtomicBool, Ordering};

static STOP: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    STOP.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    STOP.load(Ordering::Relaxed)
}

/// Test-only: clear the flag so runs in the same process don't interfere.
#[cfg(test)]
#[inline]
pub fn reset() {
    STOP.store(false, Ordering::Relaxed);
}
