//! Directory walk and deterministic aggregation of per-file results.
//!
//! The walk enumerates every entry reachable from the root, applies the path
//! filter, and records one `FileRecord` per file. Files passing the filter
//! are processed in parallel; the final record list is sorted by relative
//! path and summary counters are derived from it, so the report does not
//! depend on completion order. Per-file failures never abort the walk.

use crate::ScanRequest;
use crate::models::{FileRecord, FileStatus, ScanReport, ScanSummary};
use crate::services::filter::{self, PathDecision};
use crate::services::process;
use crate::services::tokenizer::TokenCounter;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// A file that passed the path filter and is waiting to be processed.
struct Candidate {
    abs: PathBuf,
    rel: String,
}

/// Mutable state carried through the recursive walk.
struct WalkState<'a> {
    request: &'a ScanRequest,
    pattern: &'a Regex,
    root: &'a Path,
    records: Vec<FileRecord>,
    candidates: Vec<Candidate>,
    skipped_dirs: BTreeSet<String>,
    /// Canonical paths of directories already entered. Directory symlinks
    /// are followed, so this set is what prevents revisiting a cycle.
    visited: HashSet<PathBuf>,
}

/// Scan the request's root directory and assemble a report.
///
/// An invalid root or an uncompilable pattern yields a report with exactly
/// one general error and empty results.
#[must_use]
pub fn scan(request: &ScanRequest, counter: &dyn TokenCounter) -> ScanReport {
    let root_display = request.root.to_string_lossy().to_string();

    if !request.root.is_dir() {
        return ScanReport::failed(
            root_display.clone(),
            format!("Path '{root_display}' is not a valid directory or not accessible"),
        );
    }

    let pattern = match Regex::new(&request.pattern) {
        Ok(re) => re,
        Err(err) => {
            return ScanReport::failed(
                root_display,
                format!("Invalid regex pattern '{}': {err}", request.pattern),
            );
        }
    };

    let mut state = WalkState {
        request,
        pattern: &pattern,
        root: &request.root,
        records: Vec::new(),
        candidates: Vec::new(),
        skipped_dirs: BTreeSet::new(),
        visited: HashSet::new(),
    };

    if let Ok(canonical) = fs::canonicalize(&request.root) {
        state.visited.insert(canonical);
    }

    walk_directory(&request.root, &mut state);

    let WalkState {
        mut records,
        candidates,
        skipped_dirs,
        ..
    } = state;

    log::debug!(
        "Walk finished: {} candidates, {} filtered records",
        candidates.len(),
        records.len()
    );

    let processed: Vec<FileRecord> = candidates
        .par_iter()
        .map(|candidate| {
            let (tokens, status) =
                process::process_file(&candidate.abs, &request.exclude_extensions, counter);
            FileRecord {
                path: candidate.rel.clone(),
                tokens,
                status,
            }
        })
        .collect();

    records.extend(processed);
    records.sort_by(|a, b| a.path.cmp(&b.path));

    let summary = summarize(&records, skipped_dirs);

    ScanReport {
        root: root_display,
        files: records,
        summary,
        general_errors: Vec::new(),
    }
}

fn walk_directory(dir: &Path, state: &mut WalkState<'_>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            log::warn!("Cannot read directory {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("Cannot read entry in {}: {err}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        // Follows symlinks; a broken link simply drops out of the walk.
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(err) => {
                log::warn!("Cannot stat {}: {err}", path.display());
                continue;
            }
        };

        if metadata.is_dir() {
            visit_directory(&path, state);
        } else if metadata.is_file() {
            visit_file(path, state);
        }
    }
}

fn visit_directory(path: &Path, state: &mut WalkState<'_>) {
    let rel = relative_path(state.root, path);

    // A matched directory is reported once even when empty; the walk still
    // descends so files below it get their own exclusion records.
    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && state.request.exclude_dirs.contains(name)
    {
        state.skipped_dirs.insert(rel);
    }

    match fs::canonicalize(path) {
        Ok(canonical) => {
            if state.visited.insert(canonical) {
                walk_directory(path, state);
            } else {
                log::debug!("Skipping already-visited directory {}", path.display());
            }
        }
        Err(err) => {
            log::warn!("Cannot canonicalize {}: {err}", path.display());
        }
    }
}

fn visit_file(path: PathBuf, state: &mut WalkState<'_>) {
    let rel = relative_path(state.root, &path);

    match filter::classify_file(&rel, state.pattern, &state.request.exclude_dirs) {
        PathDecision::Include => state.candidates.push(Candidate { abs: path, rel }),
        PathDecision::ExcludeDir(name) => state.records.push(FileRecord {
            path: rel,
            tokens: None,
            status: FileStatus::ExcludedDir(name),
        }),
        PathDecision::NoRegexMatch => state.records.push(FileRecord {
            path: rel,
            tokens: None,
            status: FileStatus::NoRegexMatch,
        }),
    }
}

fn summarize(records: &[FileRecord], skipped_dirs: BTreeSet<String>) -> ScanSummary {
    let mut summary = ScanSummary {
        skipped_directories: skipped_dirs.into_iter().collect(),
        ..ScanSummary::default()
    };

    for record in records {
        if record.status.is_success() {
            summary.processed += 1;
            summary.total_tokens += record.tokens.unwrap_or(0);
        } else if record.status.is_error() {
            summary.errors += 1;
        } else {
            summary.skipped += 1;
        }
    }

    summary
}

/// Path relative to the scan root with forward-slash separators.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    normalize_separators(rel)
}

#[cfg(windows)]
fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
