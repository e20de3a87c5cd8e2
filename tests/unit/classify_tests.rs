//! Unit tests for binary/text classification

use crate::fixtures::write_file_sync;
use std::path::Path;
use tempfile::TempDir;
use tokscan::services::classify::{
    SAMPLE_SIZE, extension_lower, is_processable, looks_binary, looks_binary_sampled,
};

#[test]
fn test_extension_lower_is_case_insensitive() {
    assert_eq!(extension_lower(Path::new("a.PY")), Some(".py".to_string()));
    assert_eq!(extension_lower(Path::new("dir/b.Rs")), Some(".rs".to_string()));
    assert_eq!(extension_lower(Path::new("Makefile")), None);
}

#[test]
fn test_allow_listed_extensions_need_no_file_access() {
    // These paths do not exist; the extension fast path must not touch the fs.
    assert!(is_processable(Path::new("ghost.py")));
    assert!(is_processable(Path::new("nested/ghost.TOML")));
    assert!(is_processable(Path::new("ghost.ipynb")));
}

#[test]
fn test_known_extensionless_filenames() {
    assert!(is_processable(Path::new("Dockerfile")));
    assert!(is_processable(Path::new("sub/Makefile")));
    assert!(is_processable(Path::new("LICENSE")));
}

#[test]
fn test_looks_binary_detects_null_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_file_sync(root.join("text"), b"no null bytes here").unwrap();
    write_file_sync(root.join("binary"), b"data\x00with nulls").unwrap();

    assert!(!looks_binary(&root.join("text")));
    assert!(looks_binary(&root.join("binary")));
}

#[test]
fn test_looks_binary_only_inspects_sample_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("late_null");

    let mut contents = vec![b'a'; SAMPLE_SIZE];
    contents.push(0);
    write_file_sync(&path, &contents).unwrap();

    // The null byte sits past the sample window.
    assert!(!looks_binary(&path));
    assert!(looks_binary_sampled(&path, SAMPLE_SIZE + 1));
}

#[test]
fn test_unreadable_file_treated_as_binary() {
    let temp_dir = TempDir::new().unwrap();
    assert!(looks_binary(&temp_dir.path().join("does_not_exist")));
}

#[test]
fn test_extensionless_files_fall_back_to_sniffing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_file_sync(root.join("notes"), b"just some prose").unwrap();
    write_file_sync(root.join("blob"), b"\x00\x01\x02").unwrap();

    assert!(is_processable(&root.join("notes")));
    assert!(!is_processable(&root.join("blob")));
}

#[test]
fn test_unknown_extension_is_not_processable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.xyz");
    write_file_sync(&path, b"perfectly valid text").unwrap();

    // An unrecognized extension is rejected without content sniffing.
    assert!(!is_processable(&path));
}
