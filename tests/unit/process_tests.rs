//! Unit tests for per-file processing

use crate::fixtures::{WordCounter, write_file_sync};
use std::collections::BTreeSet;
use tempfile::TempDir;
use tokscan::FileStatus;
use tokscan::services::process::process_file;

fn no_exclusions() -> BTreeSet<String> {
    BTreeSet::new()
}

fn extensions(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_processed_file_counts_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("code.py");
    write_file_sync(&path, b"def hello():\n    print('world')\n").unwrap();

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(status, FileStatus::Processed);
    assert_eq!(tokens, Some(3)); // "def", "hello():", "print('world')"
}

#[test]
fn test_empty_and_whitespace_only_files_count_zero() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.py");
    let blank = temp_dir.path().join("blank.js");
    write_file_sync(&empty, b"").unwrap();
    write_file_sync(&blank, b"   \n\t  \n ").unwrap();

    for path in [&empty, &blank] {
        let (tokens, status) = process_file(path, &no_exclusions(), &WordCounter);
        assert_eq!(tokens, Some(0), "{}", path.display());
        assert_eq!(status, FileStatus::Empty);
    }
}

#[test]
fn test_user_excluded_extension_wins_over_allow_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("script.py");
    write_file_sync(&path, b"print(1)").unwrap();

    let (tokens, status) = process_file(&path, &extensions(&[".py"]), &WordCounter);

    assert_eq!(tokens, None);
    assert_eq!(status, FileStatus::ExcludedExtension(".py".to_string()));
}

#[test]
fn test_excluded_extension_matches_case_insensitively() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("upper.LOG");
    write_file_sync(&path, b"log line").unwrap();

    let (tokens, status) = process_file(&path, &extensions(&[".log"]), &WordCounter);

    assert_eq!(tokens, None);
    assert_eq!(status, FileStatus::ExcludedExtension(".log".to_string()));
}

#[test]
fn test_extension_outside_inclusion_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("archive.tar");
    write_file_sync(&path, b"plain text despite the extension").unwrap();

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(tokens, None);
    assert_eq!(status, FileStatus::ExtensionNotIncluded(".tar".to_string()));
}

#[test]
fn test_binary_content_in_recognized_text_type() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sneaky.py");
    write_file_sync(&path, b"print(1)\x00\x01").unwrap();

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(tokens, None);
    assert_eq!(status, FileStatus::BinaryContent);
    assert!(status.is_skip());
    assert!(!status.is_error());
}

#[test]
fn test_binary_file_without_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blob");
    write_file_sync(&path, b"\x00\x01\x02\x03").unwrap();

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(tokens, None);
    assert_eq!(status, FileStatus::BinaryNoExtension);
}

#[test]
fn test_latin1_fallback_decodes_any_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.txt");
    // 0xE9 is invalid as a lone UTF-8 byte but valid Latin-1 (e-acute).
    write_file_sync(&path, b"caf\xE9 au lait").unwrap();

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(status, FileStatus::Processed);
    assert_eq!(tokens, Some(3));
}

#[test]
fn test_open_failure_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.py");

    let (tokens, status) = process_file(&path, &no_exclusions(), &WordCounter);

    assert_eq!(tokens, None);
    // The sniff pass treats an unopenable file as binary before the read
    // is ever attempted; the status must still be a non-success outcome.
    assert!(!status.is_success(), "unexpected status: {status}");
}
