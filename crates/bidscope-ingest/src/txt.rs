//! Plain text extraction

use crate::error::ExtractionResult;
use std::fs;
use std::path::Path;

/// Reads UTF-8 text files
pub struct TxtExtractor;

impl TxtExtractor {
    /// Read the whole file, preserving line breaks exactly
    ///
    /// Invalid UTF-8 is reported as an I/O error rather than replaced.
    pub fn extract(path: &Path) -> ExtractionResult {
        Ok(fs::read_to_string(path)?)
    }
}
