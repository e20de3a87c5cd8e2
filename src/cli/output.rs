//! Report rendering for the CLI

use crate::Result;
use crate::models::{FileRecord, ScanReport};
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

const PATH_COLUMN_WIDTH: usize = 60;

/// Sort order for the detail list
#[derive(Debug, Clone, Copy)]
pub enum SortBy {
    Path,
    /// Descending token count, path ascending as tie-break; records without
    /// a token count sort last.
    Tokens,
}

/// Return records in display order without touching the report's own
/// (path-sorted) sequence.
#[must_use]
pub fn sort_for_display(records: &[FileRecord], sort_by: SortBy) -> Vec<&FileRecord> {
    let mut sorted: Vec<&FileRecord> = records.iter().collect();
    match sort_by {
        SortBy::Path => {} // report order is already path-ascending
        SortBy::Tokens => {
            sorted.sort_by(|a, b| {
                let a_key = (a.tokens.is_none(), Reverse(a.tokens.unwrap_or(0)), a.path.as_str());
                let b_key = (b.tokens.is_none(), Reverse(b.tokens.unwrap_or(0)), b.path.as_str());
                a_key.cmp(&b_key)
            });
        }
    }
    sorted
}

/// Format the report as human-readable text.
#[must_use]
pub fn format_text(report: &ScanReport, sort_by: SortBy, show_skipped: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    let version = env!("CARGO_PKG_VERSION");

    lines.push(format!("tokscan report - v{version}"));
    lines.push(format!("Target directory: {}", report.root));
    lines.push("-".repeat(80));

    if report.is_failed() {
        lines.push("ERRORS ENCOUNTERED:".to_string());
        for err in &report.general_errors {
            lines.push(format!("- {err}"));
        }
        lines.push("-".repeat(80));
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("File token counts:".to_string());

    let any_hidden = report.files.iter().any(|f| f.tokens.is_none());
    if !show_skipped && any_hidden {
        lines.push(
            "(Skipped/errored files are hidden from this list. Use --show-skipped to display them.)"
                .to_string(),
        );
    }

    let header = format!("{:<PATH_COLUMN_WIDTH$} | {:>10} | Status", "Path", "Tokens");
    let rule = "-".repeat(header.len());
    lines.push(header);
    lines.push(rule.clone());

    if matches!(sort_by, SortBy::Tokens) {
        lines.push("Sorted by token count (descending).".to_string());
    }

    for record in sort_for_display(&report.files, sort_by) {
        if !show_skipped && record.tokens.is_none() {
            continue;
        }
        let tokens = record
            .tokens
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        lines.push(format!(
            "{:<PATH_COLUMN_WIDTH$} | {tokens:>10} | {}",
            truncate_path(&record.path),
            record.status
        ));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push("-".repeat(80));

    let summary = &report.summary;
    lines.push(format!(
        "Total files processed successfully: {:>10}",
        summary.processed
    ));
    lines.push(format!(
        "Total files with errors:            {:>10}",
        summary.errors
    ));
    lines.push(format!(
        "Total files skipped:                {:>10}",
        summary.skipped
    ));
    lines.push(format!(
        "Total tokens counted:               {:>10}",
        summary.total_tokens
    ));

    if !summary.skipped_directories.is_empty() {
        lines.push(String::new());
        lines.push("Directories skipped (name matched exclude list):".to_string());
        for dir in &summary.skipped_directories {
            lines.push(format!("- {dir}"));
        }
    }

    lines.push("-".repeat(80));
    lines.join("\n")
}

/// Truncate long paths for display, keeping the trailing segment.
fn truncate_path(path: &str) -> String {
    if path.chars().count() > PATH_COLUMN_WIDTH {
        let tail_len = PATH_COLUMN_WIDTH - 3;
        let tail_start = path
            .char_indices()
            .rev()
            .nth(tail_len - 1)
            .map_or(0, |(idx, _)| idx);
        format!("...{}", &path[tail_start..])
    } else {
        path.to_string()
    }
}

/// Format the report as JSON
#[must_use]
pub fn format_json(report: &ScanReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Save a rendered report to a file.
pub fn save_report<P: AsRef<Path>>(path: P, rendered: &str) -> Result<()> {
    fs::write(path, rendered)?;
    Ok(())
}
