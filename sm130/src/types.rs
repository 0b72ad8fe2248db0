// sm130-rs/sm130/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_SIZE, KEY_LEN};
use derive_more::{Display, From};
use std::convert::TryFrom;

/// Tag identifier as reported by seek/select (variable length, 4 or 7
/// bytes for Mifare parts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagId(Vec<u8>);

impl TagId {
    /// Copy the id bytes as the reader sent them.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Raw id bytes in the order received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when no tag has been seen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accumulate the id bytes into a number, first byte most significant.
    /// Ids longer than eight bytes keep only the low 64 bits.
    pub fn as_u64(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Tag type byte (datasheet section 5.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    /// No tag seen
    #[default]
    None,
    /// Mifare Ultralight (0x01)
    MifareUltralight,
    /// Mifare Standard 1K (0x02)
    MifareStandard1k,
    /// Mifare Classic 4K (0x03)
    MifareClassic4k,
    /// Tag the reader could not identify (0xFF)
    Unknown,
    /// Any other type byte, kept as sent
    Other(u8),
}

impl TagType {
    /// Type byte as it appears on the wire.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::MifareUltralight => 0x01,
            Self::MifareStandard1k => 0x02,
            Self::MifareClassic4k => 0x03,
            Self::Unknown => 0xFF,
            Self::Other(b) => *b,
        }
    }
}

impl From<u8> for TagType {
    fn from(b: u8) -> Self {
        match b {
            0x00 => Self::None,
            0x01 => Self::MifareUltralight,
            0x02 => Self::MifareStandard1k,
            0x03 => Self::MifareClassic4k,
            0xFF => Self::Unknown,
            other => Self::Other(other),
        }
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    /// Wrap 16 raw block bytes.
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Space separated hex, as used in trace logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Block contents as text, zero bytes skipped.
    pub fn to_text(&self) -> String {
        let bytes: Vec<u8> = self.0.iter().copied().filter(|&b| b != 0).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Authentication mode byte sent with the authenticate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "{:#04x}", _0)]
pub struct AuthMode(u8);

impl AuthMode {
    /// Key A supplied with the command
    pub const KEY_A: Self = Self(0xAA);
    /// Key B supplied with the command
    pub const KEY_B: Self = Self(0xBB);
    /// Factory transport key
    pub const TRANSPORT: Self = Self(0xFF);

    /// Any other mode byte the firmware accepts.
    pub const fn new(mode: u8) -> Self {
        Self(mode)
    }

    /// Mode byte sent with the command.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for AuthMode {
    fn default() -> Self {
        Self::TRANSPORT
    }
}

/// Mifare key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Wrap a 6 byte key.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// UART baud rates the reader can be switched to
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaudRate {
    /// 9600 baud (factory default)
    B9600 = 0x00,
    /// 19200 baud
    B19200 = 0x01,
    /// 38400 baud
    B38400 = 0x02,
    /// 57600 baud
    B57600 = 0x03,
    /// 115200 baud
    B115200 = 0x04,
}

impl BaudRate {
    /// Rate code sent with the set baud rate command.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Line rate in bits per second.
    pub fn bits_per_second(&self) -> u32 {
        match self {
            Self::B9600 => 9600,
            Self::B19200 => 19200,
            Self::B38400 => 38400,
            Self::B57600 => 57600,
            Self::B115200 => 115200,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = Error;

    fn try_from(rate: u32) -> Result<Self, Self::Error> {
        match rate {
            9600 => Ok(Self::B9600),
            19200 => Ok(Self::B19200),
            38400 => Ok(Self::B38400),
            57600 => Ok(Self::B57600),
            115200 => Ok(Self::B115200),
            other => Err(Error::InvalidArgument(format!(
                "unsupported baud rate {}",
                other
            ))),
        }
    }
}
