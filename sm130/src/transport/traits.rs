// sm130-rs/sm130/src/transport/traits.rs

use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Transport trait abstracts the two-wire bus away from protocol/reader
/// logic. Calls follow the bus master's model: a write transaction to an
/// address, then a request for bytes that are drained one at a time.
pub trait Transport {
    /// Bring the bus up for the peripheral at `address`
    fn begin(&mut self, address: u8) -> Result<()>;

    /// Write one complete transaction to `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Ask the peripheral for up to `count` bytes. Returns how many bytes
    /// the bus made available (possibly zero).
    fn request(&mut self, address: u8, count: usize) -> Result<usize>;

    /// Number of bytes ready to be read
    fn available(&self) -> usize;

    /// Take the next available byte
    fn read_byte(&mut self) -> Option<u8>;
}

/// Shared transports let tests keep a handle on a transport the reader owns.
impl<T: Transport> Transport for Rc<RefCell<T>> {
    fn begin(&mut self, address: u8) -> Result<()> {
        self.borrow_mut().begin(address)
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.borrow_mut().write(address, data)
    }

    fn request(&mut self, address: u8, count: usize) -> Result<usize> {
        self.borrow_mut().request(address, count)
    }

    fn available(&self) -> usize {
        self.borrow().available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.borrow_mut().read_byte()
    }
}
