#[path = "../common/mod.rs"]
mod common;

use sm130::Error;

#[test]
fn write_failure_propagates_from_reader() {
    let (shared, mut reader) = common::mock_reader(vec![common::firmware_frame("2.8")]);
    shared.borrow_mut().set_write_failures(1);

    match reader.firmware_version() {
        Err(Error::Transport(msg)) => assert!(msg.contains("simulated")),
        other => panic!("expected transport error, got {:?}", other),
    }

    // the bus recovers and the queued answer is still there
    assert_eq!(reader.firmware_version().unwrap(), "2.8");
}

#[test]
fn select_after_failed_write() -> anyhow::Result<()> {
    let (shared, mut reader) = common::mock_reader(vec![common::select_frame()]);
    shared.borrow_mut().set_write_failures(1);

    assert!(reader.select_tag().is_err());
    assert_eq!(reader.tag_number(), 0);

    let number = reader.select_tag()?;
    assert_eq!(number, 0xDEADBEEF);
    Ok(())
}
