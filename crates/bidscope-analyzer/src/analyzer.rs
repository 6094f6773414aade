//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::ResponseParser;
use crate::prompt::{PromptBuilder, SYSTEM_PROMPT};
use crate::types::{AnalysisMetadata, AnalysisReport};
use bidscope_domain::traits::{LlmProvider, TextExtractor};
use bidscope_domain::Section;
use bidscope_ingest::ExtractionError;
use bidscope_llm::LlmError;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// The Analyzer turns a document into a go/no-go analysis
pub struct Analyzer<L, X>
where
    L: LlmProvider<Error = LlmError>,
    X: TextExtractor<Error = ExtractionError>,
{
    llm_provider: L,
    extractor: X,
    config: AnalyzerConfig,
    model_name: String,
}

impl<L, X> Analyzer<L, X>
where
    L: LlmProvider<Error = LlmError>,
    X: TextExtractor<Error = ExtractionError>,
{
    /// Create a new Analyzer
    pub fn new(llm_provider: L, extractor: X, config: AnalyzerConfig) -> Self {
        Self {
            llm_provider,
            extractor,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Set the model name reported in the metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Extract a document's text and analyse it
    ///
    /// A document with no text yields a report without a record; the
    /// model is not called.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport, AnalyzerError> {
        let start = Instant::now();
        info!("Starting analysis of {}", path.display());

        let text = self.extractor.extract(path)?;
        self.analyze_extracted(Some(path.to_path_buf()), text, start)
    }

    /// Analyse text that was already extracted
    pub fn analyze_text(&self, text: impl Into<String>) -> Result<AnalysisReport, AnalyzerError> {
        self.analyze_extracted(None, text.into(), Instant::now())
    }

    fn analyze_extracted(
        &self,
        source: Option<PathBuf>,
        text: String,
        start: Instant,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let text_length = text.chars().count();

        if text.is_empty() {
            warn!("No text extracted, skipping analysis");
            let metadata = self.metadata(start, text_length, Vec::new(), false);
            return Ok(AnalysisReport {
                source,
                extracted_text: text,
                record: None,
                metadata,
            });
        }

        if text_length > self.config.max_text_length {
            return Err(AnalyzerError::TextTooLong(
                text_length,
                self.config.max_text_length,
            ));
        }

        let prompt = PromptBuilder::new(text.as_str()).build();
        debug!("Prompt length: {} chars", prompt.len());

        let reply = self
            .llm_provider
            .generate_with_system(SYSTEM_PROMPT, &prompt)?;
        debug!("LLM response length: {} chars", reply.len());

        let outcome = ResponseParser::new(self.config.fallback_enabled).parse(&reply);
        let record = outcome.record;

        info!(
            "Analysis complete: recommendation {}, {} sections found{}",
            record.recommendation,
            outcome.sections_found.len(),
            if outcome.used_fallback { " (fallback used)" } else { "" }
        );

        let metadata = self.metadata(start, text_length, outcome.sections_found, outcome.used_fallback);
        Ok(AnalysisReport {
            source,
            extracted_text: text,
            record: Some(record),
            metadata,
        })
    }

    fn metadata(
        &self,
        start: Instant,
        text_length: usize,
        sections_found: Vec<Section>,
        used_fallback: bool,
    ) -> AnalysisMetadata {
        AnalysisMetadata {
            model_name: self.model_name.clone(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            processing_time_ms: start.elapsed().as_millis() as u64,
            text_length,
            sections_found,
            used_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidscope_ingest::DocumentExtractor;
    use bidscope_llm::MockProvider;

    fn create_test_analyzer(reply: &str) -> Analyzer<MockProvider, DocumentExtractor> {
        Analyzer::new(
            MockProvider::new(reply),
            DocumentExtractor::new(),
            AnalyzerConfig::default(),
        )
    }

    #[test]
    fn test_analyze_empty_text_skips_llm() {
        let analyzer = create_test_analyzer("**Summary:** never used");
        let report = analyzer.analyze_text("").unwrap();

        assert!(report.record.is_none());
        assert!(!report.was_analyzed());
        assert_eq!(analyzer.llm_provider.call_count(), 0);
    }

    #[test]
    fn test_analyze_text_too_long() {
        let analyzer = Analyzer::new(
            MockProvider::new("unused"),
            DocumentExtractor::new(),
            AnalyzerConfig {
                max_text_length: 10,
                ..AnalyzerConfig::default()
            },
        );

        let result = analyzer.analyze_text("a".repeat(11));
        assert!(matches!(result, Err(AnalyzerError::TextTooLong(11, 10))));
        assert_eq!(analyzer.llm_provider.call_count(), 0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let analyzer = Analyzer::new(
            MockProvider::new("**Summary:** ok"),
            DocumentExtractor::new(),
            AnalyzerConfig {
                max_text_length: 4,
                ..AnalyzerConfig::default()
            },
        );

        assert!(analyzer.analyze_text("éééé").is_ok());
    }

    #[test]
    fn test_model_name_in_metadata() {
        let analyzer = create_test_analyzer("**Summary:** ok").with_model_name("gpt-4o-mini");
        let report = analyzer.analyze_text("tender").unwrap();
        assert_eq!(report.metadata.model_name, "gpt-4o-mini");
        assert_eq!(report.metadata.text_length, 6);
        assert!(report.source.is_none());
    }
}
