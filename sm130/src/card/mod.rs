// sm130-rs/sm130/src/card/mod.rs

mod info;
pub use info::TagInfo;

/// NDEF payload assembly
pub mod ndef;
pub use ndef::read_ndef_payload;
