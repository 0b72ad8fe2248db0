// sm130-rs/sm130/src/reader/builder.rs

use std::time::Duration;

use crate::protocol::ChecksumPolicy;
use crate::reader::config::ReaderConfig;
use crate::reader::handle::{Initialized, Reader, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Builder with the default configuration and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Bus address of the reader.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Wait between a send and the first poll.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    /// Wait between two polls.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// `None` polls until the reader answers.
    pub fn response_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    /// Wait after the reset issued by `initialize`.
    pub fn startup_delay(mut self, delay: Duration) -> Self {
        self.config.startup_delay = delay;
        self
    }

    /// Whether response checksums are verified.
    pub fn checksum(mut self, policy: ChecksumPolicy) -> Self {
        self.config.checksum = policy;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns NoTransport.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::NoTransport),
        }
    }

    /// Build and initialize in one go.
    pub fn build(self) -> Result<Reader<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
