// sm130-rs/sm130/src/reader/state.rs

use crate::card::TagInfo;
use crate::protocol::{BlockResponse, Response, ResponseFrame, StatusCode};
use crate::types::{BlockData, TagId, TagType};

/// Decoded result of the most recent response.
///
/// Sending a command clears everything except the block payload and the
/// antenna power, which only change when a response writes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    command: u8,
    length: u8,
    checksum: u8,
    error_code: StatusCode,
    tag_type: TagType,
    tag_id: TagId,
    version: String,
    payload: BlockData,
    antenna_power: u8,
    frame: ResponseFrame,
    response: Option<Response>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            command: 0,
            length: 0,
            checksum: 0,
            error_code: StatusCode::NONE,
            tag_type: TagType::None,
            tag_id: TagId::default(),
            version: String::new(),
            payload: BlockData::default(),
            // the antenna is on after power-up
            antenna_power: 1,
            frame: ResponseFrame::default(),
            response: None,
        }
    }
}

impl Snapshot {
    pub(crate) fn clear(&mut self) {
        *self = Self {
            payload: self.payload,
            antenna_power: self.antenna_power,
            ..Self::default()
        };
    }

    /// Header fields and raw bytes of a capture, set whether or not the body
    /// decodes.
    pub(crate) fn record_header(&mut self, frame: &ResponseFrame) {
        self.clear();
        self.command = frame.command();
        self.length = frame.length();
        self.checksum = frame.checksum();
        self.frame = frame.clone();
    }

    pub(crate) fn apply(&mut self, frame: ResponseFrame, response: Response) {
        self.record_header(&frame);
        self.error_code = response.status();

        match &response {
            Response::Firmware { version } => self.version = version.clone(),
            Response::SeekTag(t) | Response::SelectTag(t) => {
                if let Some(tag) = &t.tag {
                    self.tag_type = tag.tag_type();
                    self.tag_id = tag.id().clone();
                }
            }
            Response::ReadBlock(BlockResponse::Data { data, .. }) => self.payload = *data,
            Response::SetAntennaPower { power } => self.antenna_power = *power,
            _ => {}
        }

        self.frame = frame;
        self.response = Some(response);
    }

    /// Echoed command byte of the last response
    pub fn command(&self) -> u8 {
        self.command
    }

    /// Declared length of the last response
    pub fn packet_length(&self) -> u8 {
        self.length
    }

    /// Last captured byte of the last response
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Status of the last response, `NONE` if it carried data
    pub fn error_code(&self) -> StatusCode {
        self.error_code
    }

    /// Tag type from the last seek/select
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Tag id bytes from the last seek/select
    pub fn tag_id(&self) -> &TagId {
        &self.tag_id
    }

    /// Tag id as a number, first byte most significant
    pub fn tag_number(&self) -> u64 {
        self.tag_id.as_u64()
    }

    /// Tag found by the last seek/select, if any
    pub fn tag(&self) -> Option<TagInfo> {
        if self.tag_type == TagType::None && self.tag_id.is_empty() {
            return None;
        }
        Some(TagInfo::new(self.tag_type, self.tag_id.clone()))
    }

    /// Firmware version from the last get firmware answer
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Data of the last successful block read
    pub fn payload(&self) -> &BlockData {
        &self.payload
    }

    /// Antenna state, 1 after power-up
    pub fn antenna_power(&self) -> u8 {
        self.antenna_power
    }

    /// Raw capture of the last response
    pub fn frame(&self) -> &ResponseFrame {
        &self.frame
    }

    /// Decoded last response, `None` after a send or a failed decode
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }
}
