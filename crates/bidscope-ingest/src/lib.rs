//! Bidscope Ingest
//!
//! Extracts plain text from uploaded documents before analysis.
//!
//! # Supported formats
//!
//! - `.txt`: read verbatim, line breaks preserved
//! - `.pdf`: page text concatenated in page order
//! - `.docx`: body paragraphs, one per line
//!
//! Any other extension extracts to an empty string without touching the
//! file. Read and decode failures come back as [`ExtractionError`], whose
//! message starts with `"Error extracting text: "`.
//!
//! # Example
//!
//! ```no_run
//! use bidscope_ingest::extract_text;
//!
//! match extract_text("tender.pdf") {
//!     Ok(text) => println!("{} chars", text.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod kind;
mod pdf;
mod txt;

pub use docx::DocxExtractor;
pub use error::{ExtractionError, ExtractionResult, EXTRACTION_ERROR_PREFIX};
pub use kind::DocumentKind;
pub use pdf::PdfExtractor;
pub use txt::TxtExtractor;

use bidscope_domain::traits::TextExtractor;
use std::path::Path;
use tracing::{debug, error};

/// Extract text, choosing the decoder from the path's extension
pub fn extract_text(path: impl AsRef<Path>) -> ExtractionResult {
    let path = path.as_ref();
    extract_kind(path, DocumentKind::from_path(path))
}

/// Extract text, choosing the decoder from an explicit extension
///
/// Useful when the file on disk was stored under a generated name and the
/// original extension is known separately.
pub fn extract_text_as(path: impl AsRef<Path>, extension: &str) -> ExtractionResult {
    extract_kind(path.as_ref(), DocumentKind::from_extension(extension))
}

fn extract_kind(path: &Path, kind: DocumentKind) -> ExtractionResult {
    let result = match kind {
        DocumentKind::Text => TxtExtractor::extract(path),
        DocumentKind::Pdf => PdfExtractor::extract(path),
        DocumentKind::Docx => DocxExtractor::extract(path),
        DocumentKind::Unsupported => {
            debug!("No extractor for {}, returning empty text", path.display());
            return Ok(String::new());
        }
    };

    match &result {
        Ok(text) => debug!(
            "Extracted {} bytes of {} text from {}",
            text.len(),
            kind.as_str(),
            path.display()
        ),
        Err(e) => error!("Error extracting text from {}: {}", path.display(), e.message()),
    }

    result
}

/// Extension-dispatching extractor for use behind the [`TextExtractor`] trait
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocumentExtractor {
    type Error = ExtractionError;

    fn extract(&self, path: &Path) -> Result<String, Self::Error> {
        extract_text(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_txt_by_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "This is a test TXT file.\n").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "This is a test TXT file.\n");
    }

    #[test]
    fn test_missing_file_reports_prefixed_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("non_existent_file.txt");

        let err = extract_text(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Error extracting text: "));
        assert!(message.contains("No such file or directory") || message.contains("cannot find"));
    }

    #[test]
    fn test_unsupported_extension_is_empty() {
        let dir = TempDir::new().unwrap();
        // The file does not even exist: unsupported kinds are never opened
        let path = dir.path().join("sample.jpg");
        assert_eq!(extract_text(&path).unwrap(), "");
    }

    #[test]
    fn test_explicit_extension_overrides_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("upload_0001");
        fs::write(&path, "stored without extension").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "");
        assert_eq!(
            extract_text_as(&path, ".TXT").unwrap(),
            "stored without extension"
        );
    }

    #[test]
    fn test_document_extractor_trait() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "via trait").unwrap();

        let extractor = DocumentExtractor::new();
        assert_eq!(TextExtractor::extract(&extractor, &path).unwrap(), "via trait");
    }
}
