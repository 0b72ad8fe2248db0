// sm130-rs/sm130/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::frame::{ChecksumPolicy, ResponseFrame};
use super::responses::Response;

/// Encode a Command into a full wire frame (length, body, checksum).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let body = cmd.encode();
    Frame::encode(&body)
}

/// Wrap captured bytes into a frame, check the checksum when asked to, and
/// decode the response for the echoed command.
pub fn decode_response_frame(
    captured: &[u8],
    policy: ChecksumPolicy,
) -> Result<(ResponseFrame, Response)> {
    let frame = ResponseFrame::from_captured(captured);
    let response = decode_frame(&frame, policy)?;
    Ok((frame, response))
}

/// Check the checksum when asked to and decode an already captured frame.
pub fn decode_frame(frame: &ResponseFrame, policy: ChecksumPolicy) -> Result<Response> {
    if policy == ChecksumPolicy::Verify {
        frame.verify_checksum()?;
    }
    Response::decode(frame)
}
