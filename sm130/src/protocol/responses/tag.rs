// sm130-rs/sm130/src/protocol/responses/tag.rs

use crate::card::TagInfo;
use crate::protocol::frame::ResponseFrame;
use crate::protocol::parser;
use crate::protocol::status::StatusCode;
use crate::types::TagType;

/// Outcome of a seek or select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResponse {
    /// Status when no tag was reported
    pub status: StatusCode,
    /// Tag found, if any
    pub tag: Option<TagInfo>,
}

/// Decode Seek (0x82) / Select (0x83) responses
/// Layout: len(1) + cmd(1) + tag_type(1) + tag_id(len - 2) + csum
/// A frame with len < 3 carries a status byte instead of a tag.
pub fn decode_tag(frame: &ResponseFrame) -> TagResponse {
    let status = StatusCode::new(frame.status());
    if frame.length() <= 2 {
        return TagResponse { status, tag: None };
    }

    let tag_type = TagType::from(frame.byte(2));
    let id = parser::tag_id_between(frame.captured(), 3, frame.length() as usize);
    TagResponse {
        status,
        tag: Some(TagInfo::new(tag_type, id)),
    }
}
