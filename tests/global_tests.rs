use rotalog::{FileLogConfig, LogConfig};

// One test function: the global writer is shared by the whole test binary.
#[test]
fn test_global_writer_is_assigned_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs").join("current.log");
    let config = LogConfig::plain().with_file(FileLogConfig::new(&path));

    assert!(rotalog::try_logger().is_none());

    let first = rotalog::init(config.clone()).expect("init");
    let second = rotalog::init(LogConfig::new().with_delay_secs(9)).expect("init again");
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.config(), &config);

    let third = rotalog::logger();
    assert!(std::ptr::eq(first, third));

    let via_builder = rotalog::builder().with_color(true).init().expect("builder init");
    assert!(std::ptr::eq(first, via_builder));

    rotalog::logger().info("global line");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[INFO] global line\n");

    rotalog::shutdown();
    assert!(!rotalog::logger().has_file());
}
