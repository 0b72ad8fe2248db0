// sm130-rs/sm130/src/protocol/responses/system.rs

use crate::protocol::frame::ResponseFrame;
use crate::protocol::parser;

/// Decode Get Firmware response (command echo = 0x81)
/// Layout: len(1) + 0x81 + ASCII version + csum
/// The version is the printable run starting at byte 2.
pub fn decode_firmware(frame: &ResponseFrame) -> String {
    if frame.length() <= 2 {
        return String::new();
    }
    parser::printable_run_at(frame.payload(), 0)
}

/// Decode Set Antenna Power response (command echo = 0x90)
/// Layout: len(1) + 0x90 + power(1) + csum
pub fn decode_antenna_power(frame: &ResponseFrame) -> u8 {
    frame.byte(2)
}
