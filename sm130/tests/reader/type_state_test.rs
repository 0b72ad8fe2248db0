#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use sm130::reader::{Reader, ReaderBuilder, ReaderConfig};
use sm130::transport::mock::MockTransport;
use sm130::Error;

#[test]
fn initialize_transitions_and_resets() {
    common::init_logger();
    let shared = Rc::new(RefCell::new(MockTransport::new()));
    let reader = Reader::with_config(Box::new(shared.clone()), ReaderConfig::immediate());

    // Uninitialized reader exposes its configuration
    assert_eq!(reader.address(), 0x42);

    let initialized = reader.initialize().unwrap();
    assert_eq!(initialized.address(), 0x42);
    assert_eq!(shared.borrow().begun, vec![0x42]);
    assert_eq!(shared.borrow().sent, vec![vec![0x01, 0x80, 0x81]]);
}

#[test]
fn builder_sets_address_and_timing() {
    let shared = Rc::new(RefCell::new(MockTransport::new()));
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .config(ReaderConfig::immediate())
        .address(0x28)
        .response_timeout(Some(Duration::from_millis(5)))
        .build()
        .unwrap();

    assert_eq!(reader.address(), 0x28);
    assert_eq!(
        reader.config().response_timeout,
        Some(Duration::from_millis(5))
    );
    assert_eq!(shared.borrow().begun, vec![0x28]);
}

#[test]
fn builder_requires_transport() {
    assert!(matches!(ReaderBuilder::new().build(), Err(Error::NoTransport)));
}

#[test]
fn initialize_at_overrides_address() {
    let shared = Rc::new(RefCell::new(MockTransport::new()));
    let reader = Reader::new_with_transport(Box::new(shared.clone()));
    // startup delay is skipped for an explicit address
    let reader = reader.initialize_at(0x43).unwrap();
    assert_eq!(reader.address(), 0x43);
    assert_eq!(shared.borrow().begun, vec![0x43]);
}
