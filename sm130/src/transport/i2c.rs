// sm130-rs/sm130/src/transport/i2c.rs
#![cfg(feature = "embedded-hal")]

//! Two-wire transport over any `embedded-hal` blocking I2C bus.

use std::collections::VecDeque;
use std::fmt::Debug;

use embedded_hal::blocking::i2c;
use log::debug;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over a blocking I2C bus. Each request reads the full count
/// from the peripheral and buffers it for `read_byte`.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    rx: VecDeque<u8>,
}

impl<I2C> I2cTransport<I2C> {
    /// Take ownership of a configured bus.
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            rx: VecDeque::new(),
        }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
    E: Debug,
{
    fn begin(&mut self, address: u8) -> Result<()> {
        // The HAL configures the bus when it is constructed.
        debug!("i2c transport ready for address {:#04x}", address);
        self.rx.clear();
        Ok(())
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.i2c
            .write(address, data)
            .map_err(|e| Error::Transport(format!("{:?}", e)))
    }

    fn request(&mut self, address: u8, count: usize) -> Result<usize> {
        let mut buf = vec![0u8; count];
        self.rx.clear();
        self.i2c
            .read(address, &mut buf)
            .map_err(|e| Error::Transport(format!("{:?}", e)))?;
        self.rx.extend(buf);
        Ok(self.rx.len())
    }

    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}
