//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and response frame
//! construction so tests across the crate and tests/ directory can reuse the
//! same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{CMD_AUTHENTICATE, CMD_READ_BLOCK, RESPONSE_CAPACITY};
use crate::protocol::checksum;
use crate::reader::{Initialized, Reader, ReaderConfig};
use crate::transport::MockTransport;
use crate::Result;

/// Build a response frame the way the reader sends it:
/// `[length][command][payload...][checksum]`.
#[doc(hidden)]
pub fn response_frame(command: u8, payload: &[u8]) -> Vec<u8> {
    let length = (payload.len() + 1) as u8;
    let mut body = Vec::with_capacity(payload.len() + 1);
    body.push(command);
    body.extend_from_slice(payload);

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(length);
    out.extend_from_slice(&body);
    out.push(checksum(length, &body));
    out
}

/// Successful read-block answer for `block`, zero padded to the full 24 byte
/// bus read like an I2C request returns it.
#[doc(hidden)]
pub fn read_block_response(block: u8, data: &[u8; 16]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(17);
    payload.push(block);
    payload.extend_from_slice(data);
    let mut out = response_frame(CMD_READ_BLOCK, &payload);
    out.resize(RESPONSE_CAPACITY, 0);
    out
}

/// Read-block answer carrying the 'F' (read failed) status.
#[doc(hidden)]
pub fn read_block_failed() -> Vec<u8> {
    response_frame(CMD_READ_BLOCK, &[0x46])
}

/// Authenticate answer carrying the 'L' (login successful) status.
#[doc(hidden)]
pub fn auth_ok() -> Vec<u8> {
    response_frame(CMD_AUTHENTICATE, &[0x4C])
}

/// Authenticate answer carrying the 'U' (login failed) status.
#[doc(hidden)]
pub fn auth_failed() -> Vec<u8> {
    response_frame(CMD_AUTHENTICATE, &[0x55])
}

/// Create and initialize a Reader<Initialized> backed by a MockTransport
/// pre-seeded with the provided responses. The reset sent during
/// initialization is not answered, so the first response is for the first
/// command the test issues. The returned handle on the mock lets the test
/// inspect what was sent or queue more responses.
#[doc(hidden)]
pub fn shared_mock_reader(
    responses: Vec<Vec<u8>>,
) -> Result<(Rc<RefCell<MockTransport>>, Reader<Initialized>)> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    let shared = Rc::new(RefCell::new(mock));
    let reader =
        Reader::with_config(Box::new(shared.clone()), ReaderConfig::immediate()).initialize()?;
    Ok((shared, reader))
}
