use sm130::protocol::checksum::{checksum, sum};

#[test]
fn checksum_known_frames() {
    // Get Firmware: 01 81 82
    assert_eq!(checksum(0x01, &[0x81]), 0x82);
    // Read Block 4: 02 86 04 8C
    assert_eq!(checksum(0x02, &[0x86, 0x04]), 0x8C);
    // Set Antenna Power on: 02 90 01 93
    assert_eq!(checksum(0x02, &[0x90, 0x01]), 0x93);
}

#[test]
fn checksum_wraps_mod_256() {
    let body = [0xFFu8; 8];
    let expected = (8u32 + 0xFF * 8) % 256;
    assert_eq!(checksum(8, &body) as u32, expected);
    assert_eq!(sum(&[0x80, 0x80]), 0x00);
}

#[test]
fn checksum_equals_sum_of_length_and_body() {
    let body = [0x85u8, 0x04, 0xAA, 0, 0, 0, 0, 0, 0];
    let mut framed = vec![body.len() as u8];
    framed.extend_from_slice(&body);
    assert_eq!(checksum(body.len() as u8, &body), sum(&framed));
    assert_eq!(checksum(body.len() as u8, &body), 0x3C);
}
