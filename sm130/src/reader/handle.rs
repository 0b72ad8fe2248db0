// sm130-rs/sm130/src/reader/handle.rs

use std::marker::PhantomData;
use std::thread;
use std::time::Instant;

use log::{debug, trace, warn};

use crate::constants::{CMD_READ_BLOCK, RESPONSE_CAPACITY};
use crate::protocol::codec;
use crate::protocol::{Command, Response, ResponseFrame, StatusCode};
use crate::reader::config::ReaderConfig;
use crate::reader::state::Snapshot;
use crate::transport::Transport;
use crate::types::{AuthMode, BaudRate, BlockData, Key, TagId, TagType};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Reader whose bus has not been brought up yet.
pub struct Uninitialized;
/// Reader that has been reset and accepts commands.
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    snapshot: Snapshot,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    /// Configuration in use.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Bus address commands are sent to
    pub fn address(&self) -> u8 {
        self.config.address
    }
}

impl Reader<Uninitialized> {
    /// Create a Reader with the default configuration from an existing
    /// Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Create a Reader with an explicit configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            snapshot: Snapshot::default(),
            _state: PhantomData,
        }
    }

    /// Bring the bus up, reset the reader and give it time to restart.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let startup = self.config.startup_delay;
        let reader = self.begin()?;
        if !startup.is_zero() {
            thread::sleep(startup);
        }
        Ok(reader)
    }

    /// Same as `initialize` for a reader strapped to another bus address.
    /// No startup delay is applied.
    pub fn initialize_at(mut self, address: u8) -> Result<Reader<Initialized>> {
        self.config.address = address;
        self.begin()
    }

    fn begin(mut self) -> Result<Reader<Initialized>> {
        self.transport.begin(self.config.address)?;
        debug!("sm130 reader at {:#04x}", self.config.address);

        let mut reader = Reader {
            transport: self.transport,
            config: self.config,
            snapshot: self.snapshot,
            _state: PhantomData,
        };
        reader.reset()?;
        Ok(reader)
    }
}

impl Reader<Initialized> {
    /// Frame `cmd` and write it to the reader. The snapshot of the previous
    /// response is cleared before anything goes on the bus.
    pub fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode_command_frame(cmd)?;
        self.snapshot.clear();

        debug!("-> {:?}", cmd);
        trace!("tx [{}]", bytes_to_hex_spaced(&frame));

        if let Err(e) = self.transport.write(self.config.address, &frame) {
            warn!("command {:#04x} not sent: {}", cmd.command_code(), e);
            return Err(e);
        }
        Ok(())
    }

    /// Wait for the reader's answer, decode it into the snapshot and return
    /// the number of raw bytes captured.
    pub fn receive(&mut self) -> Result<usize> {
        self.receive_response().map(|(count, _)| count)
    }

    /// Send a command and return its decoded response. Fails with
    /// `UnexpectedResponse` when the reader echoes another command.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        self.send(&cmd)?;
        let (_, response) = self.receive_response()?;
        if response.command_code() != cmd.command_code() {
            return Err(Error::UnexpectedResponse {
                expected: cmd.command_code(),
                actual: response.command_code(),
            });
        }
        Ok(response)
    }

    fn receive_response(&mut self) -> Result<(usize, Response)> {
        let captured = self.capture()?;
        trace!("rx [{}]", bytes_to_hex_spaced(&captured));

        let frame = ResponseFrame::from_captured(&captured);
        // header fields are kept even when the body does not decode
        self.snapshot.record_header(&frame);

        let response = match codec::decode_frame(&frame, self.config.checksum) {
            Ok(response) => response,
            Err(e) => {
                warn!("response dropped: {}", e);
                return Err(e);
            }
        };
        debug!("<- {:?}", response);

        let count = frame.count();
        self.snapshot.apply(frame, response.clone());
        Ok((count, response))
    }

    /// Settle, poll until the bus has data, then drain up to the buffer
    /// capacity.
    fn capture(&mut self) -> Result<Vec<u8>> {
        let settle = self.config.settle_delay;
        if !settle.is_zero() {
            thread::sleep(settle);
        }

        let address = self.config.address;
        let started = Instant::now();
        loop {
            self.transport.request(address, RESPONSE_CAPACITY)?;
            if self.transport.available() > 0 {
                break;
            }
            if let Some(limit) = self.config.response_timeout {
                let waited = started.elapsed();
                if waited >= limit {
                    return Err(Error::NoResponse {
                        waited_ms: (settle + waited).as_millis() as u64,
                    });
                }
            }
            thread::sleep(self.config.poll_interval);
        }

        let mut captured = Vec::with_capacity(RESPONSE_CAPACITY);
        while captured.len() < RESPONSE_CAPACITY && self.transport.available() > 0 {
            match self.transport.read_byte() {
                Some(b) => captured.push(b),
                None => break,
            }
        }
        Ok(captured)
    }

    /// Reset the reader. It does not answer this command.
    pub fn reset(&mut self) -> Result<()> {
        self.send(&Command::Reset)
    }

    /// Ask the reader for its firmware version string.
    pub fn firmware_version(&mut self) -> Result<String> {
        self.send(&Command::GetFirmware)?;
        self.receive()?;
        Ok(self.snapshot.version().to_string())
    }

    /// Start a seek. The reader answers 0x4C while the seek is in progress.
    pub fn seek_tag(&mut self) -> Result<()> {
        self.send(&Command::SeekTag)?;
        self.receive()?;
        Ok(())
    }

    /// Select the tag in the field and return its number (0 if none).
    pub fn select_tag(&mut self) -> Result<u64> {
        self.send(&Command::SelectTag)?;
        self.receive()?;
        Ok(self.snapshot.tag_number())
    }

    /// Authenticate with the transport key mode and an all-zero key.
    pub fn authenticate(&mut self, block: u8) -> Result<bool> {
        self.authenticate_with_key(block, AuthMode::default(), &Key::default())
    }

    /// Authenticate with `mode` and an all-zero key.
    pub fn authenticate_with(&mut self, block: u8, mode: AuthMode) -> Result<bool> {
        self.authenticate_with_key(block, mode, &Key::default())
    }

    /// Returns true when the reader reports a successful login.
    pub fn authenticate_with_key(&mut self, block: u8, mode: AuthMode, key: &Key) -> Result<bool> {
        self.send(&Command::Authenticate {
            block,
            mode,
            key: *key,
        })?;
        self.receive()?;
        Ok(self.snapshot.error_code() == StatusCode::SUCCESS_OR_IN_PROGRESS)
    }

    /// Read a block (authenticate first). Returns the number of bytes
    /// captured, or 0 when the reader reports no tag or a failed read.
    pub fn read_block(&mut self, block: u8) -> Result<usize> {
        self.send(&Command::ReadBlock { block })?;
        let count = self.receive()?;
        let status = self.snapshot.error_code();
        if status == StatusCode::NO_TAG || status == StatusCode::FAILED {
            debug!(
                "read of block {} failed: {}",
                block,
                status.describe(CMD_READ_BLOCK).unwrap_or("unknown status")
            );
            return Ok(0);
        }
        trace!("block {}: [{}]", block, self.snapshot.payload().to_hex());
        Ok(count)
    }

    /// The last block read as text, zero bytes skipped.
    pub fn payload_string(&self) -> String {
        self.snapshot.payload().to_text()
    }

    /// Writing blocks is not supported by this driver.
    pub fn write_block(&mut self, block: u8, _message: &str) -> Result<()> {
        Err(Error::UnsupportedOperation(format!(
            "write block {} is not supported",
            block
        )))
    }

    /// Writing 4-byte (Ultralight) blocks is not supported by this driver.
    pub fn write_four_byte_block(&mut self, block: u8, _message: &str) -> Result<()> {
        Err(Error::UnsupportedOperation(format!(
            "write four byte block {} is not supported",
            block
        )))
    }

    /// 0x00 switches the antenna off, anything else on.
    pub fn set_antenna_power(&mut self, level: u8) -> Result<()> {
        self.send(&Command::SetAntennaPower { level })?;
        self.receive()?;
        Ok(())
    }

    /// Put the reader to sleep.
    pub fn sleep(&mut self) -> Result<()> {
        self.send(&Command::Sleep)?;
        self.receive()?;
        Ok(())
    }

    /// Switch the reader's UART rate. Only 9600, 19200, 38400, 57600 and
    /// 115200 are accepted.
    pub fn set_baud_rate(&mut self, rate: u32) -> Result<()> {
        let rate = BaudRate::try_from(rate)?;
        debug!("switching reader UART to {} baud", rate.bits_per_second());
        self.send(&Command::SetBaudRate { rate })?;
        self.receive()?;
        Ok(())
    }

    /// Read the payload of the NDEF record starting at `start_block`.
    pub fn ndef_payload(&mut self, start_block: u8, mode: AuthMode, key: &Key) -> Result<String> {
        crate::card::ndef::read_ndef_payload(self, start_block, mode, key)
    }

    /// Decoded state of the last response.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Echoed command byte of the last response.
    pub fn command(&self) -> u8 {
        self.snapshot.command()
    }

    /// Declared length of the last response.
    pub fn packet_length(&self) -> u8 {
        self.snapshot.packet_length()
    }

    /// Checksum byte recorded from the last capture.
    pub fn checksum(&self) -> u8 {
        self.snapshot.checksum()
    }

    /// Tag id of the last seek/select as a number, 0 if none.
    pub fn tag_number(&self) -> u64 {
        self.snapshot.tag_number()
    }

    /// Tag id bytes of the last seek/select.
    pub fn tag_id(&self) -> &TagId {
        self.snapshot.tag_id()
    }

    /// Tag type of the last seek/select.
    pub fn tag_type(&self) -> TagType {
        self.snapshot.tag_type()
    }

    /// Status reported by the last response.
    pub fn error_code(&self) -> StatusCode {
        self.snapshot.error_code()
    }

    /// Antenna state from the last set antenna power answer.
    pub fn antenna_power(&self) -> u8 {
        self.snapshot.antenna_power()
    }

    /// Data of the last successful block read.
    pub fn payload(&self) -> &BlockData {
        self.snapshot.payload()
    }
}
