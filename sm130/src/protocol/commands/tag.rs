// sm130-rs/sm130/src/protocol/commands/tag.rs

use crate::constants::{CMD_SEEK_TAG, CMD_SELECT_TAG};

/// Encode Seek for Tag (0x82)
pub fn encode_seek_tag() -> Vec<u8> {
    vec![CMD_SEEK_TAG]
}

/// Encode Select Tag (0x83)
pub fn encode_select_tag() -> Vec<u8> {
    vec![CMD_SELECT_TAG]
}
