// sm130-rs/sm130/src/protocol/commands/block.rs

use crate::constants::CMD_READ_BLOCK;

/// Encode Read Block (0x86). The block must be authenticated first.
pub fn encode_read_block(block: u8) -> Vec<u8> {
    vec![CMD_READ_BLOCK, block]
}
