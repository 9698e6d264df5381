//! Core data structures for the loaded document and extracted vocabulary
//!
//! A loaded document is reduced to plain cell text: tables of rows of cells.
//! Everything downstream works on those strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::OutputFormat;

// Type aliases for convenience
pub type TableRow = Vec<String>;
pub type TableRows = Vec<TableRow>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    /// Top-level body tables in document order
    pub tables: Vec<TableRows>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub table_count: usize,
    pub row_count: usize,
}

/// A single (word, meaning) vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub word: String,
    pub meaning: String,
}

impl WordPair {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.word, self.meaning)
    }
}

/// Outcome of a completed conversion, reported back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub table_count: usize,
    /// Pairs found before duplicates were dropped
    pub extracted_count: usize,
    /// Pairs actually written
    pub pair_count: usize,
}

impl ConversionSummary {
    pub fn duplicates_removed(&self) -> usize {
        self.extracted_count - self.pair_count
    }
}
