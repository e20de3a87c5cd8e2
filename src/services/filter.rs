//! Path filtering: directory-name exclusion and regex-match inclusion.

use regex::Regex;
use std::collections::BTreeSet;

/// Directory names excluded from scanning unless the caller overrides them.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".vscode",
    ".idea",
    "build",
    "dist",
    "env",
    "venv",
    ".venv",
    "target",
];

/// The default exclusion set as an owned collection.
#[must_use]
pub fn default_exclude_dirs() -> BTreeSet<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| (*s).to_string()).collect()
}

/// Decision for a single candidate file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDecision {
    Include,
    /// Topmost path component that matched the exclusion set.
    ExcludeDir(String),
    NoRegexMatch,
}

/// Topmost path component of `rel_path` that matches the exclusion set.
///
/// Exclusion is inherited: a match anywhere in the ancestry excludes every
/// descendant, so the check runs against every segment of the relative path,
/// not just the immediate parent.
#[must_use]
pub fn excluded_ancestor(rel_path: &str, exclude_dirs: &BTreeSet<String>) -> Option<String> {
    rel_path
        .split('/')
        .find(|segment| exclude_dirs.contains(*segment))
        .map(ToString::to_string)
}

/// Classify a file's relative path against the exclusion set and regex.
///
/// Directory-ancestry exclusion takes precedence over the regex; both are
/// independent skip reasons with no side effects.
#[must_use]
pub fn classify_file(
    rel_path: &str,
    pattern: &Regex,
    exclude_dirs: &BTreeSet<String>,
) -> PathDecision {
    if let Some(name) = excluded_ancestor(rel_path, exclude_dirs) {
        return PathDecision::ExcludeDir(name);
    }

    if pattern.is_match(rel_path) {
        PathDecision::Include
    } else {
        PathDecision::NoRegexMatch
    }
}
