//! docx-wordlist: English-Chinese vocabulary extraction from .docx tables
//!
//! This library reads the tables of a Microsoft Word document, picks out
//! (word, meaning) pairs laid out one or two per row, cleans the meaning
//! text and writes a deduplicated `word,meaning` list.

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod wordlist;

use serde::{Deserialize, Serialize};

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `word,meaning` line per pair
    #[default]
    Text,
    /// Array of `{ "word", "meaning" }` objects
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use convert::convert_document;
pub use document::{ConversionSummary, Document, WordPair, load_document};
pub use error::WordlistError;
