#[path = "../common/mod.rs"]
mod common;

use sm130::test_support::{auth_ok, read_block_response};
use sm130::types::{AuthMode, Key};

#[test]
fn uri_record_from_two_blocks() {
    let (shared, mut reader) = common::mock_reader(vec![
        auth_ok(),
        read_block_response(4, &common::uri_first_block()),
        read_block_response(5, &common::uri_second_block()),
    ]);

    let payload = reader
        .ndef_payload(4, AuthMode::KEY_A, &Key::from_bytes([0xFF; 6]))
        .unwrap();
    assert_eq!(payload, "arduino.cc");

    // the reader's snapshot reflects the last block read
    assert_eq!(reader.snapshot().frame().byte(2), 5);
    assert_eq!(shared.borrow().sent.len(), 4);
}

#[test]
fn card_module_entry_point() {
    let (_shared, mut reader) = common::mock_reader(vec![
        auth_ok(),
        read_block_response(4, &common::uri_first_block()),
        read_block_response(5, &common::uri_second_block()),
    ]);
    let payload =
        sm130::card::read_ndef_payload(&mut reader, 4, AuthMode::KEY_A, &Key::default()).unwrap();
    assert!(payload.starts_with("arduino"));
}
