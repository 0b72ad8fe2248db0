// sm130-rs/sm130/src/reader/mod.rs

/// Fluent construction of a `Reader`
pub mod builder;
/// Address, timing and checksum settings
pub mod config;
/// The type-state `Reader` handle and its commands
pub mod handle;
/// Decoded state of the last response
pub mod state;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Initialized, Reader, Uninitialized};
pub use state::Snapshot;
