// Shared helpers for integration tests. Each test crate pulls this in with
// `#[path = "../common/mod.rs"] mod common;` so not every helper is used
// everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub use fixtures::*;

use std::cell::RefCell;
use std::rc::Rc;

use sm130::reader::{Initialized, Reader, ReaderConfig};
use sm130::transport::mock::MockTransport;

/// Route `log` output through env_logger so `RUST_LOG=sm130=trace` shows
/// frame traces while a test runs.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Initialized reader over a shared mock seeded with `frames`.
pub fn mock_reader(frames: Vec<Vec<u8>>) -> (Rc<RefCell<MockTransport>>, Reader<Initialized>) {
    init_logger();
    let mut m = MockTransport::new();
    for f in frames {
        m.push_response(f);
    }
    let shared = Rc::new(RefCell::new(m));
    let reader = Reader::with_config(Box::new(shared.clone()), ReaderConfig::immediate())
        .initialize()
        .expect("initialize over mock");
    (shared, reader)
}
