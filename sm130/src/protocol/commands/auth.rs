// sm130-rs/sm130/src/protocol/commands/auth.rs

use crate::constants::CMD_AUTHENTICATE;
use crate::types::{AuthMode, Key};

/// Encode Authenticate (0x85)
/// Layout: command(1) + block(1) + mode(1) + key(6)
/// The key is always sent, even for modes that take it from EEPROM.
pub fn encode_authenticate(block: u8, mode: AuthMode, key: &Key) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + key.as_bytes().len());
    buf.push(CMD_AUTHENTICATE);
    buf.push(block);
    buf.push(mode.as_u8());
    buf.extend_from_slice(key.as_bytes());
    buf
}
