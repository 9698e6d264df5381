//! Word list output
//!
//! The text format is one `word,meaning` line per pair in UTF-8 with no
//! header. JSON output writes the same pairs as an array of objects.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::OutputFormat;
use crate::document::WordPair;
use crate::error::{Result, WordlistError};

/// Write pairs to `output_path`, replacing any existing content
pub fn write_wordlist(pairs: &[WordPair], output_path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(output_path).map_err(|e| WordlistError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Text => write_text(pairs, &mut writer)
            .map_err(|e| WordlistError::write(output_path, e))?,
        OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, pairs)
            .map_err(|e| WordlistError::write(output_path, e))?,
    }

    writer
        .flush()
        .map_err(|e| WordlistError::write(output_path, e))?;

    log::info!(
        "Wrote {} word pairs to {}",
        pairs.len(),
        output_path.display()
    );
    Ok(())
}

/// Render pairs in the text format to any writer
pub fn write_text<W: Write>(pairs: &[WordPair], writer: &mut W) -> std::io::Result<()> {
    for pair in pairs {
        writeln!(writer, "{pair}")?;
    }
    Ok(())
}
