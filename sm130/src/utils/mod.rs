//! Small helpers shared across the crate: hex formatting for frame traces
//! and the reader's timing defaults.

/// Hex formatting
pub mod hex;
/// Timing defaults
pub mod timeout;

pub use hex::*;
pub use timeout::*;
