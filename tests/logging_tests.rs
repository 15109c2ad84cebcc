// tests/logging_tests.rs

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use king_was_fallen::{logging, Error};

#[test]
fn logger_appends_lines_to_file_and_installs_once() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("kwf_log_{nanos}.log"));
    fs::write(&path, "earlier run\n").expect("seed log file");

    logging::init(&path).expect("first init succeeds");
    log::warn!("Starting game initialization...");
    log::logger().flush();

    let txt = fs::read_to_string(&path).expect("read log");
    assert!(txt.starts_with("earlier run\n"));
    assert!(txt.contains("Starting game initialization..."));
    assert!(txt.ends_with('\n'));

    let again = logging::init(&path);
    assert!(matches!(again, Err(Error::Logger(_))));
}
