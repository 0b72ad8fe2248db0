//! Timing defaults for the request/response cycle.
//!
//! The reader cannot answer in less than 50 ms, so every receive starts with
//! a settle delay before the bus is polled.

use std::time::Duration;

/// Minimum turnaround of the reader before a response can be requested.
pub const SETTLE_DELAY_MS: u64 = 50;

/// Pause between two polls of the bus while waiting for a response.
pub const POLL_INTERVAL_MS: u64 = 1;

/// Default bound on the poll loop.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Time the reader needs after a reset during initialization.
pub const STARTUP_DELAY_MS: u64 = 2000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default settle delay.
pub fn settle_delay() -> Duration {
    ms(SETTLE_DELAY_MS)
}

/// Default bound on the poll loop.
pub fn default_response_timeout() -> Duration {
    ms(DEFAULT_RESPONSE_TIMEOUT_MS)
}
