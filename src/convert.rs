//! The end-to-end conversion pipeline
//!
//! load document -> walk tables -> extract pairs -> dedup -> write.
//! Any failure aborts the whole run; nothing is written unless the document
//! loaded completely.

use std::path::Path;

use crate::OutputFormat;
use crate::document::{ConversionSummary, load_document};
use crate::error::Result;
use crate::wordlist::{dedup_pairs, extract_document_pairs, write_wordlist};

/// Convert the vocabulary tables of `input_path` into a word list at `output_path`
pub fn convert_document(
    input_path: &Path,
    output_path: &Path,
    format: OutputFormat,
) -> Result<ConversionSummary> {
    let document = load_document(input_path)?;

    let extracted = extract_document_pairs(&document.tables);
    let extracted_count = extracted.len();
    let pairs = dedup_pairs(extracted);

    log::info!(
        "{}: {} word pairs extracted, {} after removing duplicates",
        document.title,
        extracted_count,
        pairs.len()
    );

    write_wordlist(&pairs, output_path, format)?;

    Ok(ConversionSummary {
        output_path: output_path.to_path_buf(),
        format,
        table_count: document.metadata.table_count,
        extracted_count,
        pair_count: pairs.len(),
    })
}
