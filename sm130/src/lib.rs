// sm130-rs/sm130/src/lib.rs

//! sm130
//!
//! Driver for the SonMicro SM130 13.56 MHz RFID reader (Mifare tags),
//! talking to the reader over a pluggable byte transport such as I2C.
#![warn(missing_docs)]

/// Tag information and NDEF payloads
pub mod card;
/// Protocol constants
pub mod constants;
/// Crate error type
pub mod error;
/// Common imports
pub mod prelude;
/// Wire format: frames, commands, responses and status bytes
pub mod protocol;
/// Reader handle, builder, configuration and decoded state
pub mod reader;
/// Helpers for tests
pub mod test_support;
/// Byte transports the reader talks through
pub mod transport;
/// Tag, block, key and rate newtypes
pub mod types;
/// Hex and timing helpers
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
