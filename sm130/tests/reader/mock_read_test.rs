#[path = "../common/mod.rs"]
mod common;

use sm130::protocol::StatusCode;
use sm130::test_support::{auth_failed, auth_ok, read_block_failed, response_frame};
use sm130::types::{AuthMode, Key};

#[test]
fn authenticate_then_read_block() {
    let (shared, mut reader) =
        common::mock_reader(vec![auth_ok(), common::read_text_frame(4, "hello sm130")]);

    assert!(
        reader
            .authenticate_with_key(4, AuthMode::KEY_A, &Key::from_bytes([0xFF; 6]))
            .unwrap()
    );
    assert_eq!(reader.read_block(4).unwrap(), 24);
    assert_eq!(reader.payload_string(), "hello sm130");
    assert_eq!(reader.payload().as_bytes(), &common::text_block("hello sm130"));

    let sent = shared.borrow().sent.clone();
    assert_eq!(&sent[1][..4], &[0x09, 0x85, 0x04, 0xAA]);
    assert_eq!(sent[2], vec![0x02, 0x86, 0x04, 0x8C]);
}

#[test]
fn failed_login_is_false() {
    let (_shared, mut reader) = common::mock_reader(vec![auth_failed()]);
    assert!(!reader.authenticate(4).unwrap());
    assert_eq!(reader.error_code(), StatusCode::RF_OFF);
}

#[test]
fn failed_read_keeps_previous_payload() {
    let (_shared, mut reader) = common::mock_reader(vec![
        common::read_text_frame(4, "first"),
        read_block_failed(),
        response_frame(0x86, &[0x4E]),
    ]);

    assert_eq!(reader.read_block(4).unwrap(), 24);
    assert_eq!(reader.read_block(5).unwrap(), 0);
    assert_eq!(reader.error_code(), StatusCode::FAILED);
    assert_eq!(reader.payload_string(), "first");

    assert_eq!(reader.read_block(6).unwrap(), 0);
    assert_eq!(reader.error_code(), StatusCode::NO_TAG);
    assert_eq!(reader.payload_string(), "first");
}

#[test]
fn sleep_and_baud_rate() {
    let (shared, mut reader) = common::mock_reader(vec![
        response_frame(0x94, &[0x4C]),
        response_frame(0x96, &[0x00]),
    ]);
    reader.set_baud_rate(115_200).unwrap();
    assert_eq!(reader.error_code(), StatusCode::SUCCESS_OR_IN_PROGRESS);
    reader.sleep().unwrap();

    let sent = shared.borrow().sent.clone();
    assert_eq!(sent[1], vec![0x02, 0x94, 0x04, 0x9A]);
    assert_eq!(sent[2], vec![0x01, 0x96, 0x97]);
}
