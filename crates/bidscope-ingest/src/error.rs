//! Error types for text extraction

use thiserror::Error;

/// Prefix carried by every extraction failure message
pub const EXTRACTION_ERROR_PREFIX: &str = "Error extracting text:";

/// Result of extracting text from a document
pub type ExtractionResult = std::result::Result<String, ExtractionError>;

/// Errors that can occur while reading or decoding a document
///
/// The display form keeps the `"Error extracting text: "` prefix so a
/// failure shown to the user is recognisable as such.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// File could not be read (missing, unreadable, not UTF-8)
    #[error("Error extracting text: {0}")]
    Io(#[from] std::io::Error),

    /// PDF could not be loaded or a page could not be decoded
    #[error("Error extracting text: {0}")]
    Pdf(String),

    /// DOCX container or its main document part is invalid
    #[error("Error extracting text: {0}")]
    Docx(String),
}

impl ExtractionError {
    /// The underlying error message, without the prefix
    pub fn message(&self) -> String {
        match self {
            ExtractionError::Io(e) => e.to_string(),
            ExtractionError::Pdf(msg) | ExtractionError::Docx(msg) => msg.clone(),
        }
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(e: lopdf::Error) -> Self {
        ExtractionError::Pdf(e.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(e: zip::result::ZipError) -> Self {
        ExtractionError::Docx(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_prefix() {
        let err = ExtractionError::Pdf("bad xref".to_string());
        assert_eq!(err.to_string(), "Error extracting text: bad xref");
        assert!(err.to_string().starts_with(EXTRACTION_ERROR_PREFIX));
        assert_eq!(err.message(), "bad xref");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ExtractionError = io.into();
        assert_eq!(err.to_string(), "Error extracting text: gone");
    }
}
