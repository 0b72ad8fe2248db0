// sm130-rs/sm130/src/protocol/commands/system.rs

use crate::constants::{
    CMD_GET_FIRMWARE, CMD_RESET, CMD_SET_ANTENNA_POWER, CMD_SET_BAUD_RATE, CMD_SLEEP,
};
use crate::types::BaudRate;

/// Encode Reset (0x80). The reader sends no answer to this command.
pub fn encode_reset() -> Vec<u8> {
    vec![CMD_RESET]
}

/// Encode Get Firmware (0x81)
pub fn encode_get_firmware() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE]
}

/// Encode Set Antenna Power (0x90). 0x00 switches the antenna off,
/// anything else on.
pub fn encode_set_antenna_power(level: u8) -> Vec<u8> {
    vec![CMD_SET_ANTENNA_POWER, level]
}

/// Encode Set Baud Rate (0x94)
pub fn encode_set_baud_rate(rate: BaudRate) -> Vec<u8> {
    vec![CMD_SET_BAUD_RATE, rate.code()]
}

/// Encode Sleep (0x96)
pub fn encode_sleep() -> Vec<u8> {
    vec![CMD_SLEEP]
}
