// sm130-rs/sm130/src/protocol/responses/block.rs

use crate::constants::BLOCK_DATA_OFFSET;
use crate::protocol::frame::ResponseFrame;
use crate::protocol::parser;
use crate::protocol::status::StatusCode;
use crate::types::BlockData;
use crate::Result;

/// Outcome of a block read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockResponse {
    /// The block number echoed by the reader and its 16 bytes.
    Data { block: u8, data: BlockData },
    /// The reader reported 'N' or 'F' instead of data.
    Failed { status: StatusCode },
}

/// Decode Read Block response (command echo = 0x86)
/// Layout: len(1) + 0x86 + block(1) + data(16) + csum
/// Failure layout: len=2 + 0x86 + status(1) + csum
pub fn decode_read_block(frame: &ResponseFrame) -> Result<BlockResponse> {
    let status = StatusCode::new(frame.status());
    if !status.is_none() {
        return Ok(BlockResponse::Failed { status });
    }

    let block = frame.byte(2);
    let data = parser::block_at(frame.captured(), BLOCK_DATA_OFFSET)?;
    Ok(BlockResponse::Data { block, data })
}
