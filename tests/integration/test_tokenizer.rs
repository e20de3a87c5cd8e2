//! Integration tests for the cl100k_base token counter

use crate::fixtures::write_file_sync;
use tempfile::TempDir;
use tokscan::{Cl100kCounter, FileStatus, ScanRequest, TokenCounter};

#[test]
fn test_cl100k_counter_basics() {
    let counter = Cl100kCounter::new().expect("tokenizer should initialize");

    assert_eq!(counter.count(""), 0);
    assert!(counter.count("This is a sample sentence.") > 0);

    // Deterministic for identical input.
    let sample = "def hello_world():\n    print('Hello, world!')\n";
    assert_eq!(counter.count(sample), counter.count(sample));
}

#[test]
fn test_cl100k_counter_handles_unicode() {
    let counter = Cl100kCounter::new().expect("tokenizer should initialize");
    assert!(counter.count("你好, दुनिया, Привет") > 0);
}

#[test]
fn test_scan_with_real_tokenizer() {
    let counter = Cl100kCounter::new().expect("tokenizer should initialize");

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file_sync(root.join("hello.py"), b"print('hello world')\n").unwrap();

    let request = ScanRequest::new(root, r"\.py$");
    let report = tokscan::scan_report(&request, &counter);

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].status, FileStatus::Processed);
    let tokens = report.files[0].tokens.unwrap();
    assert!(tokens > 0);
    assert_eq!(report.summary.total_tokens, tokens);
}
