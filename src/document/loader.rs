//! Document loading
//!
//! `load_document()` validates a .docx file, parses it with docx-rs and keeps
//! only what the vocabulary extractor needs: the text of every top-level
//! body table in document order.

use std::path::Path;

use super::io::validate_docx_file;
use super::models::*;
use super::parsing::table::extract_table_rows;
use crate::error::{Result, WordlistError};

/// Load a .docx file from disk
///
/// This function:
/// 1. Validates the DOCX container
/// 2. Reads the whole file into memory
/// 3. Parses it with docx-rs
/// 4. Collects the plain text of each body table
pub fn load_document(file_path: &Path) -> Result<Document> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path).map_err(|e| WordlistError::open(file_path, e))?;
    let file_size = file_data.len() as u64;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let tables = parse_document(&file_data).map_err(|e| WordlistError::open(file_path, e))?;
    let row_count: usize = tables.iter().map(Vec::len).sum();

    log::info!(
        "Loaded {} ({} bytes): {} tables, {} rows",
        file_path.display(),
        file_size,
        tables.len(),
        row_count
    );

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        table_count: tables.len(),
        row_count,
    };

    Ok(Document {
        title,
        metadata,
        tables,
    })
}

/// Parse raw .docx bytes into plain text tables
///
/// Only tables that are direct children of the document body are returned;
/// tables nested inside cells are ignored. Cells are one per `w:tc`, so a
/// horizontally merged cell is not repeated across the columns it spans.
pub fn parse_document(file_data: &[u8]) -> std::result::Result<Vec<TableRows>, docx_rs::ReaderError> {
    let docx = docx_rs::read_docx(file_data)?;

    let mut tables = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Table(table) = child {
            let rows = extract_table_rows(table);
            log::debug!("Table {}: {} rows", tables.len() + 1, rows.len());
            tables.push(rows);
        }
    }

    Ok(tables)
}
