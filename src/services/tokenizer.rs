//! Token counting backed by tiktoken's cl100k_base encoding.

use crate::{Error, Result};
use tiktoken_rs::{CoreBPE, cl100k_base};

/// External token counting capability consumed by the scanner.
///
/// Implementations must be deterministic for identical input. The counter is
/// shared across rayon workers, hence the `Send + Sync` bound.
pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> u64;
}

/// `TokenCounter` backed by the cl100k_base BPE vocabulary.
///
/// Loading the vocabulary is comparatively expensive; construct once at
/// startup and pass by reference into the scan.
pub struct Cl100kCounter {
    bpe: CoreBPE,
}

impl Cl100kCounter {
    /// Load the cl100k_base encoding. Failure here is fatal to the process,
    /// not per-file.
    pub fn new() -> Result<Self> {
        let bpe = cl100k_base().map_err(|e| Error::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for Cl100kCounter {
    fn count(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        let tokens = self.bpe.encode_with_special_tokens(text);
        u64::try_from(tokens.len()).unwrap_or(u64::MAX)
    }
}
