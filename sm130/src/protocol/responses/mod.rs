// sm130-rs/sm130/src/protocol/responses/mod.rs

/// Read block
pub mod block;
/// Firmware and antenna power
pub mod system;
/// Seek and select
pub mod tag;
/// Write family
pub mod write;

pub use block::{BlockResponse, decode_read_block};
pub use system::{decode_antenna_power, decode_firmware};
pub use tag::{TagResponse, decode_tag};
pub use write::{WriteKind, decode_write};

use crate::constants::*;
use crate::protocol::frame::ResponseFrame;
use crate::protocol::status::StatusCode;

/// High-level Response enum. One variant per response shape; per-command
/// decoders live in `protocol::responses::<name>.rs` and are dispatched here
/// on the echoed command byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Reset echo
    Reset,
    /// Firmware version string
    Firmware {
        /// Printable version text
        version: String,
    },
    /// Seek result
    SeekTag(TagResponse),
    /// Select result
    SelectTag(TagResponse),
    /// Login result
    Authenticate {
        /// 'L' on success
        status: StatusCode,
    },
    /// Block data or failure
    ReadBlock(BlockResponse),
    /// Value block read status
    ReadValueBlock {
        /// Reader status
        status: StatusCode,
    },
    /// Status of any write command
    Write {
        /// Which write was answered
        kind: WriteKind,
        /// Reader status
        status: StatusCode,
    },
    /// Antenna state after the command
    SetAntennaPower {
        /// 0x00 off, otherwise on
        power: u8,
    },
    /// Baud rate change status
    SetBaudRate {
        /// 'L' on success
        status: StatusCode,
    },
    /// Sleep acknowledgement
    Sleep {
        /// Reader status
        status: StatusCode,
    },
    /// Echoed command byte the driver has no layout for.
    Unknown {
        /// The echoed command byte
        command: u8,
        /// Byte 2 when the answer was status only
        status: StatusCode,
    },
}

impl Response {
    /// Decode a captured frame. The layout is chosen by the command byte the
    /// reader echoed in position 1, not by what was sent.
    pub fn decode(frame: &ResponseFrame) -> crate::Result<Self> {
        let status = StatusCode::new(frame.status());
        let command = frame.command();

        let resp = match command {
            CMD_RESET => Self::Reset,
            CMD_GET_FIRMWARE => Self::Firmware {
                version: decode_firmware(frame),
            },
            CMD_SEEK_TAG => Self::SeekTag(decode_tag(frame)),
            CMD_SELECT_TAG => Self::SelectTag(decode_tag(frame)),
            CMD_AUTHENTICATE => Self::Authenticate { status },
            CMD_READ_BLOCK => Self::ReadBlock(decode_read_block(frame)?),
            CMD_READ_VALUE_BLOCK => Self::ReadValueBlock { status },
            CMD_SET_ANTENNA_POWER => Self::SetAntennaPower {
                power: decode_antenna_power(frame),
            },
            CMD_SET_BAUD_RATE => Self::SetBaudRate { status },
            CMD_SLEEP => Self::Sleep { status },
            other => match decode_write(frame) {
                Some((kind, status)) => Self::Write { kind, status },
                None => Self::Unknown {
                    command: other,
                    status,
                },
            },
        };
        Ok(resp)
    }

    /// Return the command byte associated with this response variant.
    pub fn command_code(&self) -> u8 {
        match self {
            Response::Reset => CMD_RESET,
            Response::Firmware { .. } => CMD_GET_FIRMWARE,
            Response::SeekTag(_) => CMD_SEEK_TAG,
            Response::SelectTag(_) => CMD_SELECT_TAG,
            Response::Authenticate { .. } => CMD_AUTHENTICATE,
            Response::ReadBlock(_) => CMD_READ_BLOCK,
            Response::ReadValueBlock { .. } => CMD_READ_VALUE_BLOCK,
            Response::Write { kind, .. } => match kind {
                WriteKind::Block => CMD_WRITE_BLOCK,
                WriteKind::ValueBlock => CMD_WRITE_VALUE_BLOCK,
                WriteKind::FourByteBlock => CMD_WRITE_FOUR_BYTE_BLOCK,
                WriteKind::MasterKey => CMD_WRITE_MASTER_KEY,
            },
            Response::SetAntennaPower { .. } => CMD_SET_ANTENNA_POWER,
            Response::SetBaudRate { .. } => CMD_SET_BAUD_RATE,
            Response::Sleep { .. } => CMD_SLEEP,
            Response::Unknown { command, .. } => *command,
        }
    }

    /// The error/status code this response reports. Firmware and antenna
    /// responses never carry one.
    pub fn status(&self) -> StatusCode {
        match self {
            Response::Reset | Response::Firmware { .. } | Response::SetAntennaPower { .. } => {
                StatusCode::NONE
            }
            Response::SeekTag(t) | Response::SelectTag(t) => t.status,
            Response::ReadBlock(BlockResponse::Failed { status }) => *status,
            Response::ReadBlock(BlockResponse::Data { .. }) => StatusCode::NONE,
            Response::Authenticate { status }
            | Response::ReadValueBlock { status }
            | Response::Write { status, .. }
            | Response::SetBaudRate { status }
            | Response::Sleep { status }
            | Response::Unknown { status, .. } => *status,
        }
    }
}
