// sm130-rs/sm130/src/protocol/status.rs

//! Status bytes returned by the reader. The same byte means different
//! things depending on the command it answers, so descriptions are looked up
//! per command.

use crate::constants::*;
use derive_more::{Display, From};

/// Raw status byte. Zero means the response carried no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:#04x}", _0)]
pub struct StatusCode(u8);

impl StatusCode {
    /// No status: the response carried data instead.
    pub const NONE: Self = Self(0x00);
    /// 'L': login / write-key / baud-rate success, seek in progress
    pub const SUCCESS_OR_IN_PROGRESS: Self = Self(0x4C);
    /// 'N': no tag present, or the operation failed
    pub const NO_TAG: Self = Self(0x4E);
    /// 'U': RF field off, login failed, or write verification mismatch
    pub const RF_OFF: Self = Self(0x55);
    /// 'E': invalid key format in EEPROM
    pub const INVALID_KEY: Self = Self(0x45);
    /// 'F': read or write failed
    pub const FAILED: Self = Self(0x46);
    /// 'I': block is not a value block
    pub const NOT_VALUE_BLOCK: Self = Self(0x49);
    /// 'X': block is write protected
    pub const PROTECTED: Self = Self(0x58);

    /// Wrap a raw status byte.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Raw status byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// True when no status was reported.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Meaning of this status in answer to `command`, if the datasheet
    /// defines one.
    pub fn describe(&self, command: u8) -> Option<&'static str> {
        let s = match (command, self.0) {
            (CMD_SEEK_TAG, 0x4C) => "command in progress",
            (CMD_SEEK_TAG, 0x55) => "antenna is off",
            (CMD_SELECT_TAG, 0x4E) => "no tag present",
            (CMD_SELECT_TAG, 0x55) => "access failed because RF field is off",
            (CMD_AUTHENTICATE, 0x4C) => "login successful",
            (CMD_AUTHENTICATE, 0x45) => "invalid key format in EEPROM",
            (CMD_AUTHENTICATE, 0x4E) => "no tag present or login failed",
            (CMD_AUTHENTICATE, 0x55) => "login failed",
            (CMD_READ_BLOCK, 0x4E) => "no tag present",
            (CMD_READ_BLOCK, 0x46) => "read failed",
            (CMD_READ_VALUE_BLOCK, 0x4E) => "no tag present",
            (CMD_READ_VALUE_BLOCK, 0x46) => "read failed",
            (CMD_READ_VALUE_BLOCK, 0x49) => "block is not a value block",
            (CMD_WRITE_BLOCK | CMD_WRITE_FOUR_BYTE_BLOCK, 0x55) => {
                "data read doesn't match data written"
            }
            (CMD_WRITE_BLOCK | CMD_WRITE_FOUR_BYTE_BLOCK, 0x58) => "block is write protected",
            (CMD_WRITE_BLOCK | CMD_WRITE_FOUR_BYTE_BLOCK, 0x4E) => "no tag present",
            (CMD_WRITE_BLOCK | CMD_WRITE_FOUR_BYTE_BLOCK, 0x46) => "write failed",
            (CMD_WRITE_VALUE_BLOCK, 0x4E) => "no tag present",
            (CMD_WRITE_VALUE_BLOCK, 0x46) => "read failed during verification",
            (CMD_WRITE_VALUE_BLOCK, 0x49) => "block is not a value block",
            (CMD_WRITE_MASTER_KEY, 0x4C) => "master key written",
            (CMD_WRITE_MASTER_KEY, 0x4E) => "write master key failed",
            (CMD_SET_BAUD_RATE, 0x4C) => "baud rate set",
            (CMD_SET_BAUD_RATE, 0x4E) => "set baud rate failed",
            _ => return None,
        };
        Some(s)
    }
}
