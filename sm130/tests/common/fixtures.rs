// fixtures.rs: commonly used test frames and blocks

use sm130::test_support::{read_block_response, response_frame};

pub fn sample_tag_id_bytes() -> [u8; 4] {
    [0xDE, 0xAD, 0xBE, 0xEF]
}

/// Select answer for a Mifare 1K tag with the sample id.
pub fn select_frame() -> Vec<u8> {
    let mut payload = vec![0x02u8]; // tag type
    payload.extend_from_slice(&sample_tag_id_bytes());
    response_frame(0x83, &payload)
}

pub fn select_no_tag_frame() -> Vec<u8> {
    response_frame(0x83, &[0x4E])
}

pub fn seek_in_progress_frame() -> Vec<u8> {
    response_frame(0x82, &[0x4C])
}

pub fn firmware_frame(version: &str) -> Vec<u8> {
    response_frame(0x81, version.as_bytes())
}

pub fn antenna_frame(power: u8) -> Vec<u8> {
    response_frame(0x90, &[power])
}

pub fn text_block(text: &str) -> [u8; 16] {
    let mut b = [0u8; 16];
    let n = text.len().min(16);
    b[..n].copy_from_slice(&text.as_bytes()[..n]);
    b
}

pub fn read_text_frame(block: u8, text: &str) -> Vec<u8> {
    read_block_response(block, &text_block(text))
}

/// First block of a URI record: payload length 11 (prefix byte plus
/// "arduino.cc"), the first seven characters of which fit in this block.
pub fn uri_first_block() -> [u8; 16] {
    [
        0x00, 0x00, 0x03, 0x0F, 0xD1, 0x01, 0x0B, b'U', 0x01, b'a', b'r', b'd', b'u', b'i', b'n',
        b'o',
    ]
}

/// Rest of the URI followed by the terminator TLV.
pub fn uri_second_block() -> [u8; 16] {
    let mut b = text_block(".cc");
    b[3] = 0xFE;
    b
}
