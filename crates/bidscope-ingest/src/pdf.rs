//! PDF extraction

use crate::error::ExtractionResult;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Extracts text from PDF files page by page
pub struct PdfExtractor;

impl PdfExtractor {
    /// Decode every page in page-number order and concatenate the text
    ///
    /// Pages without extractable text contribute nothing. A decoding error
    /// on any page fails the whole extraction.
    pub fn extract(path: &Path) -> ExtractionResult {
        let document = Document::load(path)?;
        let pages = document.get_pages();

        debug!("PDF {} has {} page(s)", path.display(), pages.len());

        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = document.extract_text(&[*page_number])?;
            if page_text.is_empty() {
                debug!("Page {} yielded no text", page_number);
                continue;
            }
            text.push_str(&page_text);
        }

        Ok(text)
    }
}
