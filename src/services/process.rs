//! Per-file processing: exclusion checks, binary re-check, decoding, and
//! token counting.

use crate::models::FileStatus;
use crate::services::classify;
use crate::services::tokenizer::TokenCounter;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Process one file that already passed the path filter.
///
/// Returns the token count (present only for success-tier statuses) and the
/// outcome status. Check order: user extension exclusion, allow-list
/// classification, binary-content re-check, read, decode, count. The first
/// check that fires wins.
#[must_use]
pub fn process_file(
    path: &Path,
    exclude_extensions: &BTreeSet<String>,
    counter: &dyn TokenCounter,
) -> (Option<u64>, FileStatus) {
    let extension = classify::extension_lower(path);

    // User exclusions apply only to files that actually have an extension
    // and take precedence over the default inclusion list.
    if let Some(ext) = &extension
        && exclude_extensions.contains(ext)
    {
        return (None, FileStatus::ExcludedExtension(ext.clone()));
    }

    if !classify::is_processable(path) {
        return match extension {
            Some(ext) => (None, FileStatus::ExtensionNotIncluded(ext)),
            None if classify::looks_binary(path) => (None, FileStatus::BinaryNoExtension),
            None => (None, FileStatus::Unrecognized),
        };
    }

    // A recognized extension does not guarantee text content; re-check the
    // leading bytes before reading the whole file.
    if classify::looks_binary(path) {
        return (None, FileStatus::BinaryContent);
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => return (None, FileStatus::ReadError(err.to_string())),
    };

    let content = decode_text(bytes);

    if content.trim().is_empty() {
        return (Some(0), FileStatus::Empty);
    }

    let tokens = counter.count(&content);
    log::debug!("Counted {tokens} tokens for {}", path.display());
    (Some(tokens), FileStatus::Processed)
}

/// Decode file bytes as UTF-8, falling back to Latin-1, which accepts any
/// byte sequence by mapping each byte to the code point of the same value.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}
