//! Core services for classification, filtering, file processing, and scanning

pub mod classify;
pub mod filter;
pub mod process;
pub mod scan;
pub mod tokenizer;
