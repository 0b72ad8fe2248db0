use sm130::protocol::frame::ResponseFrame;
use sm130::protocol::responses::{BlockResponse, Response, TagResponse};
use sm130::protocol::StatusCode;
use sm130::test_support::{read_block_response, response_frame};
use sm130::types::TagType;

fn decode(bytes: &[u8]) -> Response {
    Response::decode(&ResponseFrame::from_captured(bytes)).unwrap()
}

#[test]
fn select_decodes_tag_most_significant_first() {
    match decode(&response_frame(0x83, &[0x02, 0x11, 0x22, 0x33])) {
        Response::SelectTag(TagResponse {
            status,
            tag: Some(tag),
        }) => {
            assert!(status.is_none());
            assert_eq!(tag.tag_type(), TagType::MifareStandard1k);
            assert_eq!(tag.number(), 0x112233);
            assert_eq!(tag.id().as_bytes(), &[0x11, 0x22, 0x33]);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn seek_in_progress_has_no_tag() {
    let resp = decode(&response_frame(0x82, &[0x4C]));
    assert_eq!(
        resp,
        Response::SeekTag(TagResponse {
            status: StatusCode::SUCCESS_OR_IN_PROGRESS,
            tag: None
        })
    );
}

#[test]
fn seven_byte_ultralight_id() {
    let id = [0x04, 0x5A, 0x21, 0x3A, 0xB2, 0x2C, 0x80];
    let mut payload = vec![0x01];
    payload.extend_from_slice(&id);
    match decode(&response_frame(0x83, &payload)) {
        Response::SelectTag(TagResponse { tag: Some(tag), .. }) => {
            assert_eq!(tag.tag_type(), TagType::MifareUltralight);
            assert_eq!(tag.number(), 0x045A213AB22C80);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn firmware_version_is_printable_run() {
    let resp = decode(&[0x05, 0x81, b'2', b'.', b'8', 0x00]);
    assert_eq!(
        resp,
        Response::Firmware {
            version: "2.8".to_string()
        }
    );
}

#[test]
fn read_block_data_and_failure() {
    let data = *b"0123456789abcdef";
    match decode(&read_block_response(4, &data)) {
        Response::ReadBlock(BlockResponse::Data { block, data: d }) => {
            assert_eq!(block, 4);
            assert_eq!(d.as_bytes(), &data);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    let resp = decode(&response_frame(0x86, &[0x4E]));
    assert_eq!(
        resp,
        Response::ReadBlock(BlockResponse::Failed {
            status: StatusCode::NO_TAG
        })
    );
}

#[test]
fn decode_is_pure() {
    let bytes = response_frame(0x85, &[0x55]);
    let frame = ResponseFrame::from_captured(&bytes);
    let a = Response::decode(&frame).unwrap();
    let b = Response::decode(&frame).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.status(), StatusCode::RF_OFF);
}
