//! Vocabulary extraction, cleanup and output
//!
//! This module turns the plain text tables of a loaded document into a
//! deduplicated list of word pairs and writes it out.

pub mod dedup;
pub mod extract;
pub mod normalize;
pub mod writer;

pub use dedup::dedup_pairs;
pub use extract::{extract_document_pairs, extract_row_pairs, extract_table_pairs};
pub use normalize::{clean_meaning, is_english_word};
pub use writer::{write_text, write_wordlist};
