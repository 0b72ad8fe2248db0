//! Reader configuration

use std::time::Duration;

use crate::constants::DEFAULT_ADDRESS;
use crate::protocol::ChecksumPolicy;
use crate::utils::timeout::{
    POLL_INTERVAL_MS, STARTUP_DELAY_MS, default_response_timeout, ms, settle_delay,
};

/// Bus address, timing and validation settings for a `Reader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// 7-bit bus address of the reader
    pub address: u8,
    /// Wait between sending a command and the first poll
    pub settle_delay: Duration,
    /// Wait between two polls while no byte is available
    pub poll_interval: Duration,
    /// Bound on the poll loop; `None` waits forever
    pub response_timeout: Option<Duration>,
    /// Wait after the reset issued by `initialize`
    pub startup_delay: Duration,
    /// Whether response checksums are checked
    pub checksum: ChecksumPolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            settle_delay: settle_delay(),
            poll_interval: ms(POLL_INTERVAL_MS),
            response_timeout: Some(default_response_timeout()),
            startup_delay: ms(STARTUP_DELAY_MS),
            checksum: ChecksumPolicy::Ignore,
        }
    }
}

impl ReaderConfig {
    /// No delays and a single poll per receive. Meant for transports that
    /// answer synchronously, such as the mock.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            poll_interval: Duration::ZERO,
            response_timeout: Some(Duration::ZERO),
            startup_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
