//! Document kind detection from file extensions

use std::path::Path;

/// Document formats the extractor knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Plain UTF-8 text (`.txt`)
    Text,
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Office Open XML word-processing document (`.docx`)
    Docx,
    /// Anything else; extracts to empty text
    Unsupported,
}

impl DocumentKind {
    /// Detect the kind from an extension, with or without the leading dot
    ///
    /// Matching is case-insensitive: `".PDF"`, `"pdf"` and `".pdf"` are all PDF.
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.trim().trim_start_matches('.').to_lowercase();
        match extension.as_str() {
            "txt" => DocumentKind::Text,
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }

    /// Detect the kind from a path's extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentKind::Unsupported)
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Text => "txt",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Unsupported => "unsupported",
        }
    }

    /// Whether the extractor reads this kind at all
    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(DocumentKind::from_extension(".txt"), DocumentKind::Text);
        assert_eq!(DocumentKind::from_extension("PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_extension(".Docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_extension(".doc"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::from_extension(""), DocumentKind::Unsupported);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/tender.final.PDF")),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/README")),
            DocumentKind::Unsupported
        );
        assert!(!DocumentKind::from_path(Path::new("photo.jpg")).is_supported());
    }
}
