//! Document loading and data structures module
//!
//! This module opens Microsoft Word (.docx) documents and reduces them to
//! the plain text tables the vocabulary extractor works on.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{load_document, parse_document};
pub use models::*;
