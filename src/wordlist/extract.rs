//! Vocabulary extraction from table rows
//!
//! The expected layout is one or two entries per row:
//! `[index, word, meaning]` or `[index, word, meaning, index, word, meaning]`.
//! Rows that don't fit are skipped silently; vocabulary documents routinely
//! carry header and decorative rows alongside the real entries.

use super::normalize::{clean_meaning, is_english_word};
use crate::document::{TableRow, TableRows, WordPair};

/// Substrings of the first cell that mark a header row
const HEADER_MARKERS: [&str; 4] = ["no", "no.", "word", "meaning"];

/// Column indices of the (word, meaning) cells for the left and right entry
const LEFT_PAIR: (usize, usize) = (1, 2);
const RIGHT_PAIR: (usize, usize) = (4, 5);

/// Extract up to two word pairs from a single table row
pub fn extract_row_pairs(row: &[String]) -> Vec<WordPair> {
    let mut pairs = Vec::new();

    if row.len() < 3 || is_header_row(row) {
        return pairs;
    }

    pairs.extend(extract_pair(row, LEFT_PAIR));
    if row.len() >= 6 {
        pairs.extend(extract_pair(row, RIGHT_PAIR));
    }

    pairs
}

/// Extract all word pairs from one table, in row order
pub fn extract_table_pairs(rows: &[TableRow]) -> Vec<WordPair> {
    rows.iter().flat_map(|row| extract_row_pairs(row)).collect()
}

/// Extract all word pairs from every table, in document order
pub fn extract_document_pairs(tables: &[TableRows]) -> Vec<WordPair> {
    let mut all_pairs = Vec::new();

    for (index, table) in tables.iter().enumerate() {
        let pairs = extract_table_pairs(table);
        log::debug!(
            "Table {}: {} word pairs from {} rows",
            index + 1,
            pairs.len(),
            table.len()
        );
        all_pairs.extend(pairs);
    }

    all_pairs
}

/// Detect a header row by its first cell
///
/// Plain substring matching, so a first cell such as "Snow" also counts.
fn is_header_row(row: &[String]) -> bool {
    let first = row[0].to_lowercase();
    HEADER_MARKERS.iter().any(|marker| first.contains(marker))
}

fn extract_pair(row: &[String], (word_col, meaning_col): (usize, usize)) -> Option<WordPair> {
    let word = row[word_col].trim();
    if !is_english_word(word) {
        return None;
    }

    let meaning = clean_meaning(row[meaning_col].trim());
    if word.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(WordPair::new(word, meaning))
}
