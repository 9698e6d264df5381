//! Document parsing utilities
//!
//! This module contains the functions that turn docx-rs elements into
//! plain text tables.

pub(crate) mod table;
pub(crate) mod text;
