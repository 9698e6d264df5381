//! File validation
//!
//! Checks that a path points at a real .docx container before handing the
//! bytes to docx-rs, so users get a readable message instead of a zip error.

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Result, WordlistError};

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(WordlistError::open(
            file_path,
            format!(
                "invalid file format, expected .docx file, got .{extension}\n\
                Note: only Word .docx files are supported (not .doc, .xlsx, .zip, etc.)"
            ),
        ));
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path).map_err(|e| WordlistError::open(file_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| WordlistError::open(file_path, e))?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(WordlistError::open(
                file_path,
                "this appears to be an Excel file (.xlsx), only Word documents (.docx) are supported",
            ));
        }

        return Err(WordlistError::open(
            file_path,
            "invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document.",
        ));
    }

    Ok(())
}
