// sm130-rs/sm130/src/protocol/parser.rs

use crate::constants::BLOCK_SIZE;
use crate::types::{BlockData, TagId};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a 16 byte block starting at `start`.
pub fn block_at(data: &[u8], start: usize) -> Result<BlockData> {
    let s = slice_at(data, start, BLOCK_SIZE)?;
    BlockData::try_from(s)
}

/// Tag id bytes from `start` up to and including `end`, clipped to the
/// slice. Never fails: a short capture yields a shorter id.
pub fn tag_id_between(data: &[u8], start: usize, end: usize) -> TagId {
    let stop = (end + 1).min(data.len());
    if start >= stop {
        return TagId::default();
    }
    TagId::from_bytes(&data[start..stop])
}

/// Printable ASCII (0x20..=0x7E) is what the firmware string is made of.
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Collect the run of printable ASCII starting at `start`, stopping at the
/// first non-printable byte or the end of the slice.
pub fn printable_run_at(data: &[u8], start: usize) -> String {
    data.iter()
        .skip(start)
        .take_while(|&&b| is_printable(b))
        .map(|&b| b as char)
        .collect()
}
