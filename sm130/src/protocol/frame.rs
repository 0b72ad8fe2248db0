// sm130-rs/sm130/src/protocol/frame.rs

use crate::constants::RESPONSE_CAPACITY;
use crate::protocol::checksum::{checksum, sum};
use crate::{Error, Result};

/// SM130 command frame helper.
/// Format: [Len(1)] [Command(1)] [Args(n)] [CSUM(1)]
/// Len counts the command byte and the arguments.
pub struct Frame;

impl Frame {
    /// Encode a command body (command byte followed by its arguments) into a
    /// full frame. The checksum is computed on every call.
    pub fn encode(body: &[u8]) -> Result<Vec<u8>> {
        if body.is_empty() || body.len() > u8::MAX as usize {
            return Err(Error::InvalidLength {
                expected: u8::MAX as usize,
                actual: body.len(),
            });
        }

        let len = body.len() as u8;
        let mut out = Vec::with_capacity(1 + body.len() + 1);
        out.push(len);
        out.extend_from_slice(body);
        out.push(checksum(len, body));
        Ok(out)
    }
}

/// Whether the checksum byte of a response is checked on receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumPolicy {
    /// Trust the bus; the checksum is recorded but not compared.
    #[default]
    Ignore,
    /// Reject responses whose checksum byte does not match.
    Verify,
}

/// A response captured from the reader.
///
/// The capture buffer has room for `RESPONSE_CAPACITY` bytes plus a zero
/// sentinel written after the last captured byte. Bytes past the capture
/// read as zero, the same as a freshly cleared buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    raw: [u8; RESPONSE_CAPACITY + 1],
    count: usize,
}

impl Default for ResponseFrame {
    fn default() -> Self {
        Self {
            raw: [0u8; RESPONSE_CAPACITY + 1],
            count: 0,
        }
    }
}

impl ResponseFrame {
    /// Wrap captured bytes. Anything beyond the buffer capacity is dropped.
    pub fn from_captured(bytes: &[u8]) -> Self {
        let count = bytes.len().min(RESPONSE_CAPACITY);
        let mut raw = [0u8; RESPONSE_CAPACITY + 1];
        raw[..count].copy_from_slice(&bytes[..count]);
        raw[count] = 0;
        Self { raw, count }
    }

    /// Number of bytes captured from the transport.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The captured bytes, without the sentinel.
    pub fn captured(&self) -> &[u8] {
        &self.raw[..self.count]
    }

    /// Byte at `idx` of the buffer; zero outside the capture.
    pub fn byte(&self, idx: usize) -> u8 {
        self.raw.get(idx).copied().unwrap_or(0)
    }

    /// Declared length (command byte + payload)
    pub fn length(&self) -> u8 {
        self.byte(0)
    }

    /// Echoed command byte
    pub fn command(&self) -> u8 {
        self.byte(1)
    }

    /// Command-specific payload: bytes `2..=length`, clipped to the capture.
    pub fn payload(&self) -> &[u8] {
        let end = (self.length() as usize + 1).min(self.count);
        if end <= 2 {
            return &[];
        }
        &self.raw[2..end]
    }

    /// Status byte: byte 2 when the reader only sent a command and a code
    /// (declared length below 3), zero otherwise.
    pub fn status(&self) -> u8 {
        if self.length() < 3 { self.byte(2) } else { 0 }
    }

    /// Checksum byte as recorded from the bus: the last captured byte, zero
    /// when nothing arrived. On I2C the capture is padded to the requested
    /// count, so this is often a pad byte.
    pub fn checksum(&self) -> u8 {
        if self.count > 0 {
            self.raw[self.count - 1]
        } else {
            0
        }
    }

    /// Checksum byte at its declared position, `length + 1`, when it was
    /// captured; otherwise the last captured byte.
    pub fn declared_checksum(&self) -> u8 {
        let idx = self.length() as usize + 1;
        if idx < self.count {
            self.raw[idx]
        } else {
            self.checksum()
        }
    }

    /// Checksum the reader should have sent for the captured header and
    /// payload.
    pub fn expected_checksum(&self) -> u8 {
        let end = (self.length() as usize + 1).min(self.count);
        sum(&self.raw[..end])
    }

    /// Compare the declared checksum byte with the computed one.
    pub fn verify_checksum(&self) -> Result<()> {
        let expected = self.expected_checksum();
        let actual = self.declared_checksum();
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }
}
