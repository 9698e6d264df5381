//! Error types for the conversion pipeline
//!
//! Only two things can go wrong once the pipeline starts: the source document
//! cannot be opened or parsed, or the word list cannot be written. Rows that
//! don't fit the vocabulary layout are skipped and never reported here.

use std::path::PathBuf;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    /// The source document is missing, is not a .docx file, or failed to parse
    #[error("failed to open document {}: {source}", .path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The output destination could not be created or written
    #[error("failed to write word list {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl WordlistError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        WordlistError::DocumentOpen {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        WordlistError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WordlistError>;
