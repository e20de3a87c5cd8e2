//! Binary/text classification for candidate files.
//!
//! Extension and filename allow-listing is the cheap fast path; null-byte
//! sniffing of a bounded prefix is the fallback for ambiguous extensionless
//! files. Callers re-apply the content sniff even for allow-listed
//! extensions, since a recognized extension does not guarantee text content.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing for binary content.
pub const SAMPLE_SIZE: usize = 4096;

/// File extensions treated as text/code by default (lower-cased, dot-prefixed).
pub const INCLUDE_EXTENSIONS: &[&str] = &[
    // Common code files
    ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".go", ".rs",
    ".rb", ".php", ".swift", ".kt", ".kts", ".scala", ".pl", ".pm", ".sh", ".bash", ".zsh",
    // Common text/config files
    ".md", ".txt", ".json", ".yaml", ".yml", ".xml", ".html", ".css", ".scss", ".toml", ".ini",
    ".cfg", ".conf", ".sql", ".dockerfile", ".gitignore", ".gitattributes",
    // Notebooks are JSON; the text parts are what users usually care about
    ".ipynb",
];

/// Well-known text files that carry no extension.
pub const TEXT_FILENAMES: &[&str] = &["Dockerfile", "Makefile", "Jenkinsfile", "LICENSE", "README"];

/// Lower-cased, dot-prefixed extension of a path, or `None` if it has none.
#[must_use]
pub fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Check whether a file looks binary by sniffing a bounded prefix for null
/// bytes. Open/read failures are treated conservatively as binary rather
/// than propagated.
#[must_use]
pub fn looks_binary(path: &Path) -> bool {
    looks_binary_sampled(path, SAMPLE_SIZE)
}

#[must_use]
pub fn looks_binary_sampled(path: &Path, sample_size: usize) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            log::debug!("Treating unreadable file as binary: {} ({err})", path.display());
            return true;
        }
    };

    let mut sample = Vec::with_capacity(sample_size);
    let take_len = u64::try_from(sample_size).unwrap_or(u64::MAX);
    if let Err(err) = file.take(take_len).read_to_end(&mut sample) {
        log::debug!("Treating unreadable file as binary: {} ({err})", path.display());
        return true;
    }

    sample.contains(&0)
}

/// Decide whether a file is eligible for token counting.
///
/// True for allow-listed extensions and well-known extensionless filenames;
/// extensionless files outside that list are included only when content
/// sniffing finds no null bytes.
#[must_use]
pub fn is_processable(path: &Path) -> bool {
    if let Some(ext) = extension_lower(path)
        && INCLUDE_EXTENSIONS.contains(&ext.as_str())
    {
        return true;
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && TEXT_FILENAMES.contains(&name)
    {
        return true;
    }

    if path.extension().is_none() {
        return !looks_binary(path);
    }

    false
}
