// sm130-rs/sm130/src/protocol/responses/write.rs

use crate::constants::{
    CMD_WRITE_BLOCK, CMD_WRITE_FOUR_BYTE_BLOCK, CMD_WRITE_MASTER_KEY, CMD_WRITE_VALUE_BLOCK,
};
use crate::protocol::frame::ResponseFrame;
use crate::protocol::status::StatusCode;

/// Which write command a status-only answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// Write Block (0x89)
    Block,
    /// Write Value Block (0x8A)
    ValueBlock,
    /// Write 4 Byte Block (0x8B)
    FourByteBlock,
    /// Write Master Key (0x8C)
    MasterKey,
}

impl WriteKind {
    /// Write kind for an echoed command byte, if it is one of the writes.
    pub fn from_command(command: u8) -> Option<Self> {
        match command {
            CMD_WRITE_BLOCK => Some(Self::Block),
            CMD_WRITE_VALUE_BLOCK => Some(Self::ValueBlock),
            CMD_WRITE_FOUR_BYTE_BLOCK => Some(Self::FourByteBlock),
            CMD_WRITE_MASTER_KEY => Some(Self::MasterKey),
            _ => None,
        }
    }
}

/// Decode the answer to any write command. Only the status byte is
/// meaningful; the written data is not echoed back. Returns None when the
/// echoed command is not a write.
pub fn decode_write(frame: &ResponseFrame) -> Option<(WriteKind, StatusCode)> {
    let kind = WriteKind::from_command(frame.command())?;
    Some((kind, StatusCode::new(frame.status())))
}
