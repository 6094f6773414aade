//! Pipeline tests for the Analyzer

#[cfg(test)]
mod tests {
    use crate::{Analyzer, AnalyzerConfig, AnalyzerError, PromptBuilder};
    use bidscope_domain::traits::TextExtractor;
    use bidscope_domain::{Recommendation, Section, NOT_AVAILABLE};
    use bidscope_ingest::{DocumentExtractor, ExtractionError};
    use bidscope_llm::MockProvider;
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PERFECT_RESPONSE: &str = "
**Summary:**
This is a test summary.

**Key Requirements:**
- Requirement 1
- Requirement 2: Sub-requirement

**Potential Challenges:**
- Challenge 1

**Overall Recommendation:** GO

**Reasoning for Recommendation:**
The project aligns with our goals.
";

    /// Extractor serving fixed text per path
    #[derive(Default)]
    struct InMemoryExtractor {
        documents: HashMap<PathBuf, String>,
    }

    impl InMemoryExtractor {
        fn with(mut self, path: &str, text: &str) -> Self {
            self.documents.insert(PathBuf::from(path), text.to_string());
            self
        }
    }

    impl TextExtractor for InMemoryExtractor {
        type Error = ExtractionError;

        fn extract(&self, path: &Path) -> Result<String, Self::Error> {
            self.documents.get(path).cloned().ok_or_else(|| {
                ExtractionError::from(io::Error::new(
                    io::ErrorKind::NotFound,
                    "No such file or directory",
                ))
            })
        }
    }

    #[test]
    fn test_full_analysis_flow() {
        let tender = "Build a bridge over the river.";
        let mut llm = MockProvider::new("unexpected prompt");
        llm.add_response(PromptBuilder::new(tender).build(), PERFECT_RESPONSE);

        let extractor = InMemoryExtractor::default().with("tender.txt", tender);
        let analyzer = Analyzer::new(llm.clone(), extractor, AnalyzerConfig::default())
            .with_model_name("gpt-3.5-turbo");

        let report = analyzer.analyze_file(Path::new("tender.txt")).unwrap();
        let record = report.record.expect("record");

        assert_eq!(record.summary, "This is a test summary.");
        assert_eq!(record.recommendation, Recommendation::Go);
        assert_eq!(record.reasoning, "The project aligns with our goals.");
        assert_eq!(report.extracted_text, tender);
        assert_eq!(report.source.as_deref(), Some(Path::new("tender.txt")));
        assert_eq!(report.metadata.sections_found, Section::ALL.to_vec());
        assert!(!report.metadata.used_fallback);
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn test_analysis_from_real_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tender.txt");
        fs::write(&path, "Supply of 40 electric buses.\n").unwrap();

        let llm = MockProvider::new(PERFECT_RESPONSE);
        let analyzer = Analyzer::new(llm.clone(), DocumentExtractor::new(), AnalyzerConfig::default());

        let report = analyzer.analyze_file(&path).unwrap();
        assert_eq!(report.extracted_text, "Supply of 40 electric buses.\n");
        assert!(report.was_analyzed());
        assert!(llm
            .last_prompt()
            .unwrap()
            .contains("---\nSupply of 40 electric buses.\n\n---\n"));
    }

    #[test]
    fn test_unsupported_document_is_not_analyzed() {
        let llm = MockProvider::new(PERFECT_RESPONSE);
        let analyzer = Analyzer::new(llm.clone(), DocumentExtractor::new(), AnalyzerConfig::default());

        let report = analyzer.analyze_file(Path::new("scan.jpg")).unwrap();
        assert!(report.record.is_none());
        assert_eq!(report.extracted_text, "");
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_extraction_failure_becomes_record() {
        let llm = MockProvider::new(PERFECT_RESPONSE);
        let analyzer = Analyzer::new(llm.clone(), InMemoryExtractor::default(), AnalyzerConfig::default());

        let err = analyzer.analyze_file(Path::new("missing.pdf")).unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
        assert_eq!(llm.call_count(), 0);

        let record = err.into_record();
        assert!(record.reasoning.starts_with("Error extracting text: "));
        assert_eq!(record.summary, NOT_AVAILABLE);
    }

    #[test]
    fn test_llm_failure_becomes_record() {
        let tender = "Some tender";
        let mut llm = MockProvider::default();
        llm.add_error(PromptBuilder::new(tender).build());
        let analyzer = Analyzer::new(llm, DocumentExtractor::new(), AnalyzerConfig::default());

        let err = analyzer.analyze_text(tender).unwrap_err();
        assert!(matches!(err, AnalyzerError::Llm(_)));

        let record = err.into_record();
        assert!(record.reasoning.starts_with("Error interacting with OpenAI API: "));
        assert_eq!(record.recommendation, Recommendation::Uncertain);
    }

    #[test]
    fn test_error_text_reply_is_passed_through() {
        let llm = MockProvider::new("Error: the model refused");
        let analyzer = Analyzer::new(llm, DocumentExtractor::new(), AnalyzerConfig::default());

        let record = analyzer.analyze_text("tender").unwrap().record.unwrap();
        assert_eq!(record.reasoning, "Error: the model refused");
        assert_eq!(record.summary, NOT_AVAILABLE);
    }

    #[test]
    fn test_fallback_follows_config() {
        let reply = "Sure. **Summary:** Inline. **Key Requirements:** none";

        let lenient = Analyzer::new(
            MockProvider::new(reply),
            DocumentExtractor::new(),
            AnalyzerConfig::default(),
        );
        let report = lenient.analyze_text("tender").unwrap();
        assert!(report.metadata.used_fallback);
        assert_eq!(report.record.unwrap().summary, "Inline.");

        let strict = Analyzer::new(
            MockProvider::new(reply),
            DocumentExtractor::new(),
            AnalyzerConfig::strict(),
        );
        let report = strict.analyze_text("tender").unwrap();
        assert!(!report.metadata.used_fallback);
        assert_eq!(report.record.unwrap().summary, NOT_AVAILABLE);
    }
}
