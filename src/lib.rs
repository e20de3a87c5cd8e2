//! Code Token Counting Library
//!
//! This library scans a directory tree, selects text/code files by name,
//! extension, and a path regex, counts LLM input tokens for each selected
//! file with a cl100k_base tokenizer, and produces a deterministic, sorted
//! report with per-file counts and aggregate totals.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{FileRecord, FileStatus, ScanReport, ScanSummary};
pub use services::tokenizer::{Cl100kCounter, TokenCounter};

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Tokenizer(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Tokenizer(msg) => write!(f, "Tokenizer error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Input for a single scan. Constructed once from caller input and never
/// mutated while the scan runs.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Directory to scan.
    pub root: PathBuf,
    /// Regex tested against each file's forward-slash relative path.
    pub pattern: String,
    /// Bare directory names excluded anywhere in a path's ancestry.
    pub exclude_dirs: BTreeSet<String>,
    /// Lower-cased, dot-prefixed extensions to exclude before classification.
    pub exclude_extensions: BTreeSet<String>,
}

impl ScanRequest {
    /// Create a request with the default directory exclusion set and no
    /// extension exclusions.
    #[must_use]
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, pattern: S) -> Self {
        Self {
            root: root.into(),
            pattern: pattern.into(),
            exclude_dirs: services::filter::default_exclude_dirs(),
            exclude_extensions: BTreeSet::new(),
        }
    }

    /// Merge additional excluded directory names into the request.
    pub fn add_exclude_dirs<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let trimmed = name.as_ref().trim();
            if !trimmed.is_empty() {
                self.exclude_dirs.insert(trimmed.to_string());
            }
        }
    }

    /// Add excluded extensions, normalizing to lower case with a leading dot.
    pub fn add_exclude_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let cleaned = ext.as_ref().trim().to_lowercase();
            if cleaned.is_empty() {
                continue;
            }
            if cleaned.starts_with('.') {
                self.exclude_extensions.insert(cleaned);
            } else {
                self.exclude_extensions.insert(format!(".{cleaned}"));
            }
        }
    }
}

/// Scan a directory tree and return a report.
///
/// Fatal conditions (invalid root, invalid regex) are reported through
/// `ScanReport::general_errors` with empty results; per-file failures are
/// isolated and never abort the walk.
#[must_use]
pub fn scan_report(request: &ScanRequest, counter: &dyn TokenCounter) -> ScanReport {
    services::scan::scan(request, counter)
}
