// sm130-rs/sm130/src/prelude.rs

pub use crate::card::TagInfo;
pub use crate::protocol::{ChecksumPolicy, Command, Response, StatusCode};
pub use crate::reader::{Initialized, Reader, ReaderBuilder, ReaderConfig, Uninitialized};
pub use crate::transport::Transport;
pub use crate::{AuthMode, BaudRate, BlockData, Error, Key, Result, TagId, TagType};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
