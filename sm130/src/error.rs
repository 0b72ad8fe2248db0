// sm130-rs/sm130/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The bus rejected a read or write
    #[error("transport error: {0}")]
    Transport(String),

    /// Reader built without a transport
    #[error("no transport configured")]
    NoTransport,

    /// No byte arrived before the response timeout
    #[error("no response from reader after {waited_ms} ms")]
    NoResponse { waited_ms: u64 },

    /// Capture too short for the layout the command byte selects
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Declared checksum byte differs from the computed one
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Echoed command differs from the one sent
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// Reader answered with a failure status
    #[error("reader status {status:#04x} for command {command:#04x}")]
    ReaderStatus { command: u8, status: u8 },

    /// Argument out of the range the reader accepts
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command this driver does not implement
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Login to the first block of an NDEF record failed
    #[error("could not authenticate against block {block}")]
    AuthenticationFailed { block: u8 },

    /// Login to a following sector of an NDEF record failed
    #[error("could not authenticate against sector: {block}")]
    SectorAuthenticationFailed { block: u8 },

    /// Block read returned a byte count other than a full block answer
    #[error("expected {expected} bytes, got: {actual}")]
    UnexpectedBlockSize { expected: usize, actual: usize },

    /// NDEF text record not in UTF-8 with a two byte language code
    #[error("unsupported character set: {0}")]
    UnsupportedCharset(u8),

    /// NDEF record that is neither URI nor text
    #[error("unknown record type: {0}")]
    UnknownRecordType(u8),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
