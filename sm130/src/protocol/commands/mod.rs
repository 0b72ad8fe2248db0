// sm130-rs/sm130/src/protocol/commands/mod.rs

/// Authenticate
pub mod auth;
/// Block reads
pub mod block;
/// Reset, firmware, antenna, baud rate and sleep
pub mod system;
/// Seek and select
pub mod tag;

pub use auth::encode_authenticate;
pub use block::encode_read_block;
pub use system::{
    encode_get_firmware, encode_reset, encode_set_antenna_power, encode_set_baud_rate,
    encode_sleep,
};
pub use tag::{encode_seek_tag, encode_select_tag};

use crate::constants::*;
use crate::types::{AuthMode, BaudRate, Key};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reset the reader (0x80); it sends no answer
    Reset,
    /// Firmware version (0x81)
    GetFirmware,
    /// Start seeking for a tag (0x82)
    SeekTag,
    /// Select the tag in the field (0x83)
    SelectTag,
    /// Log into a block's sector (0x85)
    Authenticate {
        /// Block to authenticate against
        block: u8,
        /// Key type or EEPROM key slot
        mode: AuthMode,
        /// Key sent along with the mode
        key: Key,
    },
    /// Read a 16 byte block (0x86)
    ReadBlock {
        /// Block to read
        block: u8,
    },
    /// Switch the RF field (0x90)
    SetAntennaPower {
        /// 0x00 off, anything else on
        level: u8,
    },
    /// Change the UART rate (0x94)
    SetBaudRate {
        /// New rate
        rate: BaudRate,
    },
    /// Power down until woken (0x96)
    Sleep,
}

impl Command {
    /// Return the command byte as defined by the SM130 datasheet.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Reset => CMD_RESET,
            Self::GetFirmware => CMD_GET_FIRMWARE,
            Self::SeekTag => CMD_SEEK_TAG,
            Self::SelectTag => CMD_SELECT_TAG,
            Self::Authenticate { .. } => CMD_AUTHENTICATE,
            Self::ReadBlock { .. } => CMD_READ_BLOCK,
            Self::SetAntennaPower { .. } => CMD_SET_ANTENNA_POWER,
            Self::SetBaudRate { .. } => CMD_SET_BAUD_RATE,
            Self::Sleep => CMD_SLEEP,
        }
    }

    /// Encode the command into the frame body (command byte + args).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Reset => encode_reset(),
            Self::GetFirmware => encode_get_firmware(),
            Self::SeekTag => encode_seek_tag(),
            Self::SelectTag => encode_select_tag(),
            Self::Authenticate { block, mode, key } => encode_authenticate(*block, *mode, key),
            Self::ReadBlock { block } => encode_read_block(*block),
            Self::SetAntennaPower { level } => encode_set_antenna_power(*level),
            Self::SetBaudRate { rate } => encode_set_baud_rate(*rate),
            Self::Sleep => encode_sleep(),
        }
    }
}
