use sm130::Error;
use sm130::protocol::frame::{ChecksumPolicy, Frame, ResponseFrame};
use sm130::protocol::codec::decode_response_frame;
use sm130::test_support::response_frame;

#[test]
fn frame_encode_rejects_empty_and_oversized_bodies() {
    assert!(matches!(Frame::encode(&[]), Err(Error::InvalidLength { .. })));
    let body = vec![0u8; 256];
    assert!(matches!(
        Frame::encode(&body),
        Err(Error::InvalidLength { actual: 256, .. })
    ));
}

#[test]
fn response_header_fields() {
    let bytes = response_frame(0x83, &[0x02, 0x11, 0x22, 0x33]);
    let frame = ResponseFrame::from_captured(&bytes);
    assert_eq!(frame.length(), 5);
    assert_eq!(frame.command(), 0x83);
    assert_eq!(frame.payload(), &[0x02, 0x11, 0x22, 0x33]);
    assert_eq!(frame.checksum(), *bytes.last().unwrap());
    // length >= 3 means no status byte
    assert_eq!(frame.status(), 0);
    assert!(frame.verify_checksum().is_ok());
}

#[test]
fn capture_is_capped_at_buffer_capacity() {
    let bytes = vec![0x30u8; 40];
    let frame = ResponseFrame::from_captured(&bytes);
    assert_eq!(frame.count(), 24);
    // sentinel after the capture reads as zero
    assert_eq!(frame.byte(24), 0);
    assert_eq!(frame.byte(100), 0);
}

#[test]
fn truncated_capture_takes_last_byte_as_checksum() {
    // declares 5 bytes but only 4 arrived
    let frame = ResponseFrame::from_captured(&[0x05, 0x83, 0x02, 0x11]);
    assert_eq!(frame.checksum(), 0x11);
    assert_eq!(frame.payload(), &[0x02, 0x11]);
}

#[test]
fn checksum_policy_controls_rejection() {
    let mut bytes = response_frame(0x90, &[0x01]);
    *bytes.last_mut().unwrap() ^= 0xFF;

    assert!(decode_response_frame(&bytes, ChecksumPolicy::Ignore).is_ok());
    match decode_response_frame(&bytes, ChecksumPolicy::Verify) {
        Err(Error::ChecksumMismatch { expected: 0x93, .. }) => {}
        other => panic!("expected ChecksumMismatch, got {:?}", other.map(|(_, r)| r)),
    }
}

#[test]
fn encoded_frames_match_datasheet_hex() {
    use sm130::protocol::codec::encode_command_frame;
    use sm130::protocol::commands::Command;

    let read = encode_command_frame(&Command::ReadBlock { block: 4 }).unwrap();
    assert_eq!(read, hex::decode("0286048c").unwrap());
    assert_eq!(sm130::utils::bytes_to_hex(&read), hex::encode(&read));
}
