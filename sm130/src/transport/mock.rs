// sm130-rs/sm130/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Mock transport for unit tests. It records written frames and returns
/// queued responses, one per bus request.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames written, in order
    pub sent: Vec<Vec<u8>>,
    /// Answers still queued, one per request
    pub responses: Vec<Vec<u8>>,
    /// Addresses passed to `begin`
    pub begun: Vec<u8>,
    /// Record request calls: (address, count)
    pub requests: Vec<(u8, usize)>,
    /// Testing hook: number of writes that should fail
    pub write_failures: usize,
    rx: VecDeque<u8>,
}

impl MockTransport {
    /// Empty mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Queue the bytes answered to the next request. An empty response
    /// simulates a reader that is not ready yet.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }
}

impl Transport for MockTransport {
    fn begin(&mut self, address: u8) -> Result<()> {
        self.begun.push(address);
        Ok(())
    }

    fn write(&mut self, _address: u8, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn request(&mut self, address: u8, count: usize) -> Result<usize> {
        self.requests.push((address, count));
        self.rx.clear();
        if self.responses.is_empty() {
            return Ok(0);
        }
        let resp = self.responses.remove(0);
        self.rx.extend(resp.into_iter().take(count));
        Ok(self.rx.len())
    }

    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}
