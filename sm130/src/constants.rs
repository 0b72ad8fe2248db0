// sm130-rs/sm130/src/constants.rs
//! Common protocol constants used across the crate

/// Default bus address of the SM130 (7-bit)
pub const DEFAULT_ADDRESS: u8 = 0x42;

/// Capacity of the response capture buffer. The reader always answers with
/// at most this many bytes.
pub const RESPONSE_CAPACITY: usize = 24;

/// Size of a Mifare data block
pub const BLOCK_SIZE: usize = 16;

/// Offset of block data inside a read-block response
pub const BLOCK_DATA_OFFSET: usize = 3;

// Command bytes understood by the reader (datasheet section 5)

/// Reset
pub const CMD_RESET: u8 = 0x80;
/// Get firmware version
pub const CMD_GET_FIRMWARE: u8 = 0x81;
/// Seek for tag
pub const CMD_SEEK_TAG: u8 = 0x82;
/// Select tag
pub const CMD_SELECT_TAG: u8 = 0x83;
/// Authenticate
pub const CMD_AUTHENTICATE: u8 = 0x85;
/// Read block
pub const CMD_READ_BLOCK: u8 = 0x86;
/// Read value block
pub const CMD_READ_VALUE_BLOCK: u8 = 0x87;
/// Write block
pub const CMD_WRITE_BLOCK: u8 = 0x89;
/// Write value block
pub const CMD_WRITE_VALUE_BLOCK: u8 = 0x8A;
/// Write 4 byte block (Ultralight)
pub const CMD_WRITE_FOUR_BYTE_BLOCK: u8 = 0x8B;
/// Write master key
pub const CMD_WRITE_MASTER_KEY: u8 = 0x8C;
/// Antenna power
pub const CMD_SET_ANTENNA_POWER: u8 = 0x90;
/// Set baud rate
pub const CMD_SET_BAUD_RATE: u8 = 0x94;
/// Sleep
pub const CMD_SLEEP: u8 = 0x96;

/// Length of a Mifare authentication key
pub const KEY_LEN: usize = 6;

/// NDEF record type byte for URI records
pub const NDEF_RECORD_URI: u8 = 0x55;
/// NDEF record type byte for text records
pub const NDEF_RECORD_TEXT: u8 = 0x54;
/// Text record status byte: UTF-8 with a two byte language code
pub const NDEF_TEXT_UTF8_LANG2: u8 = 0x02;
/// Raw response size expected for the first NDEF block
pub const NDEF_BLOCK_RESPONSE_LEN: usize = 24;
