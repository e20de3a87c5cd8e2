//! Data models for file records, scan summaries, and reports

use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of processing a single file. Each variant is a distinct,
/// user-visible status; the rendered string is the serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Token counting succeeded.
    Processed,
    /// File was empty or whitespace-only; counts as success with 0 tokens.
    Empty,
    /// Some path component matched an excluded directory name.
    ExcludedDir(String),
    /// Relative path did not match the request pattern.
    NoRegexMatch,
    /// Extension was in the caller's exclusion set.
    ExcludedExtension(String),
    /// Extension is not in the default inclusion list.
    ExtensionNotIncluded(String),
    /// No extension and content sniffing found null bytes.
    BinaryNoExtension,
    /// Not classifiable as text by extension, name, or content.
    Unrecognized,
    /// Recognized text extension but null bytes in the content sample.
    BinaryContent,
    /// File could not be opened or decoded.
    ReadError(String),
}

impl FileStatus {
    /// Token count is present for success-tier statuses only.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FileStatus::Processed | FileStatus::Empty)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, FileStatus::ReadError(_))
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        !self.is_success() && !self.is_error()
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Processed => write!(f, "Processed"),
            FileStatus::Empty => write!(f, "Empty or whitespace-only file"),
            FileStatus::ExcludedDir(name) => {
                write!(f, "Skipped: under excluded directory '{name}'")
            }
            FileStatus::NoRegexMatch => write!(f, "Skipped: did not match pattern"),
            FileStatus::ExcludedExtension(ext) => {
                write!(f, "Skipped: excluded extension {ext}")
            }
            FileStatus::ExtensionNotIncluded(ext) => {
                write!(f, "Skipped: extension {ext} not in inclusion list")
            }
            FileStatus::BinaryNoExtension => {
                write!(f, "Skipped: binary file without extension")
            }
            FileStatus::Unrecognized => write!(f, "Skipped: unrecognized file type"),
            FileStatus::BinaryContent => {
                write!(f, "Skipped: binary content in recognized text type")
            }
            FileStatus::ReadError(detail) => write!(f, "Error: read failure ({detail})"),
        }
    }
}

impl Serialize for FileStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One record per discovered file, keyed by its relative path.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, forward-slash separators.
    pub path: String,
    /// Present only when processing succeeded; `Some(0)` for empty files.
    pub tokens: Option<u64>,
    pub status: FileStatus,
}

/// Aggregate counters for a completed scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub processed: u64,
    pub errors: u64,
    pub skipped: u64,
    pub total_tokens: u64,
    /// Relative paths of directories whose bare name matched the exclusion
    /// set, deduplicated and sorted.
    pub skipped_directories: Vec<String>,
}

/// Result of one scan: per-file records sorted by relative path plus
/// summary statistics. `general_errors` is non-empty only when the scan
/// failed outright before any file work.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub files: Vec<FileRecord>,
    pub summary: ScanSummary,
    pub general_errors: Vec<String>,
}

impl ScanReport {
    /// Build the terminal report for a scan that failed before file work.
    #[must_use]
    pub fn failed(root: String, message: String) -> Self {
        Self {
            root,
            files: Vec::new(),
            summary: ScanSummary::default(),
            general_errors: vec![message],
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        !self.general_errors.is_empty()
    }
}
