// sm130-rs/sm130/src/protocol/mod.rs

/// Frame checksum
pub mod checksum;
/// Command to bytes and bytes to response
pub mod codec;
/// Command enum and per-command encoders
pub mod commands;
/// Command frames and captured response frames
pub mod frame;
/// Bounds-checked byte access helpers
pub mod parser;
/// Response enum and per-command decoders
pub mod responses;
/// Status bytes and their meanings
pub mod status;

pub use checksum::checksum;
pub use commands::Command;
pub use frame::{ChecksumPolicy, Frame, ResponseFrame};
pub use responses::{BlockResponse, Response, TagResponse, WriteKind};
pub use status::StatusCode;
