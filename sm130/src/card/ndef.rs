// sm130-rs/sm130/src/card/ndef.rs

//! NDEF payload assembly for Mifare Classic tags.
//!
//! The first record header sits in the block read at `start_block`; the
//! payload then continues through the data blocks that follow, skipping each
//! sector trailer and logging into the next sector on the way.

use log::{debug, trace};

use crate::constants::{
    BLOCK_DATA_OFFSET, BLOCK_SIZE, CMD_READ_BLOCK, NDEF_BLOCK_RESPONSE_LEN, NDEF_RECORD_TEXT,
    NDEF_RECORD_URI, NDEF_TEXT_UTF8_LANG2,
};
use crate::reader::{Initialized, Reader};
use crate::types::{AuthMode, Key};
use crate::{Error, Result};

// Offsets into the raw read-block response of the first block.
const PAYLOAD_LENGTH_OFFSET: usize = 9;
const RECORD_TYPE_OFFSET: usize = 10;
const TEXT_STATUS_OFFSET: usize = 11;
const URI_PAYLOAD_OFFSET: usize = 12;
// two language code bytes follow the text status byte
const TEXT_PAYLOAD_OFFSET: usize = 14;

const BLOCK_DATA_END: usize = BLOCK_DATA_OFFSET + BLOCK_SIZE;

/// Where the payload starts in the first block and how many bytes it has.
fn record_layout(reader: &Reader<Initialized>) -> Result<(usize, i32)> {
    let frame = reader.snapshot().frame();
    let payload_length = frame.byte(PAYLOAD_LENGTH_OFFSET) as i32;

    match frame.byte(RECORD_TYPE_OFFSET) {
        NDEF_RECORD_URI => Ok((URI_PAYLOAD_OFFSET, payload_length)),
        NDEF_RECORD_TEXT => {
            let status = frame.byte(TEXT_STATUS_OFFSET);
            if status != NDEF_TEXT_UTF8_LANG2 {
                return Err(Error::UnsupportedCharset(status));
            }
            Ok((TEXT_PAYLOAD_OFFSET, payload_length - 2))
        }
        other => Err(Error::UnknownRecordType(other)),
    }
}

fn next_block(block: u8) -> Result<u8> {
    block
        .checked_add(1)
        .ok_or_else(|| Error::InvalidArgument(format!("payload runs past block {}", u8::MAX)))
}

/// Read the payload of the NDEF record whose header is in `start_block`.
///
/// Every block is read through `reader`, so its snapshot reflects the last
/// block touched when this returns.
pub fn read_ndef_payload(
    reader: &mut Reader<Initialized>,
    start_block: u8,
    mode: AuthMode,
    key: &Key,
) -> Result<String> {
    let mut block = start_block;
    if !reader.authenticate_with_key(block, mode, key)? {
        return Err(Error::AuthenticationFailed { block });
    }

    let read = reader.read_block(block)?;
    if read != NDEF_BLOCK_RESPONSE_LEN {
        return Err(Error::UnexpectedBlockSize {
            expected: NDEF_BLOCK_RESPONSE_LEN,
            actual: read,
        });
    }

    let (mut start, mut remaining) = record_layout(reader)?;
    debug!(
        "ndef record at block {}: {} payload bytes",
        start_block, remaining
    );
    if remaining <= 0 {
        return Ok(String::new());
    }

    let mut bytes = Vec::new();
    loop {
        let frame = reader.snapshot().frame();
        for j in start..BLOCK_DATA_END {
            remaining -= 1;
            if remaining > 0 {
                bytes.push(frame.byte(j));
            }
        }
        if remaining <= 0 {
            break;
        }

        block = next_block(block)?;
        if (block as u16 + 1) % 4 == 0 {
            // sector trailer
            block = next_block(block)?;
            if !reader.authenticate_with_key(block, mode, key)? {
                return Err(Error::SectorAuthenticationFailed { block });
            }
            trace!("ndef payload continues in sector at block {}", block);
        }

        if reader.read_block(block)? == 0 {
            return Err(Error::ReaderStatus {
                command: CMD_READ_BLOCK,
                status: reader.error_code().as_u8(),
            });
        }
        start = BLOCK_DATA_OFFSET;
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
