//! Table extraction
//!
//! Reduces a docx-rs table to rows of plain cell text. Cell paragraphs are
//! joined with newlines and the text is left untrimmed; deciding what counts
//! as whitespace noise is up to the vocabulary extractor.

use super::super::models::{TableRow, TableRows};
use super::text::extract_paragraph_text;

/// Extract the rows of a docx-rs Table as plain cell text
///
/// Each `w:tc` element yields one cell. A cell spanning several grid columns
/// (`gridSpan`) is not repeated, so later cells in that row sit at lower
/// indices than their grid column.
pub(crate) fn extract_table_rows(table: &docx_rs::Table) -> TableRows {
    let mut rows = Vec::with_capacity(table.rows.len());

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut row_cells: TableRow = Vec::with_capacity(row.cells.len());

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            row_cells.push(extract_cell_text(cell));
        }

        rows.push(row_cells);
    }

    rows
}

/// Extract the text of a cell, one line per paragraph
pub(crate) fn extract_cell_text(cell: &docx_rs::TableCell) -> String {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            paragraphs.push(extract_paragraph_text(para));
        }
        // Nested tables and content controls are not part of the cell text
    }

    paragraphs.join("\n")
}
