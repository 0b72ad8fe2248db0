// sm130-rs/sm130/src/transport/mod.rs

/// I2C transport over `embedded-hal`
#[cfg(feature = "embedded-hal")]
pub mod i2c;
/// In-memory transport for tests
pub mod mock;
/// The `Transport` trait
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
