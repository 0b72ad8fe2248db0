// sm130-rs/sm130/src/protocol/checksum.rs

/// Sum of `bytes` modulo 256.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Compute the SM130 frame checksum
/// CSUM = (length + command + sum(args)) & 0xff
pub fn checksum(length: u8, body: &[u8]) -> u8 {
    length.wrapping_add(sum(body))
}
