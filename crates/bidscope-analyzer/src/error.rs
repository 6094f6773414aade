//! Error types for the Analyzer

use bidscope_domain::AnalysisRecord;
use bidscope_ingest::ExtractionError;
use bidscope_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during an analysis
///
/// Upstream failures display exactly as their source does, so the
/// `"Error ..."` marker reaches the user unchanged.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The document could not be read or decoded
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The completion service failed
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Extracted text exceeds the configured maximum
    #[error("Error: document too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Error: invalid configuration: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Render the failure as a record, message in `reasoning`
    pub fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::from_failure(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidscope_domain::{Recommendation, NOT_AVAILABLE};
    use std::io;

    #[test]
    fn test_upstream_messages_pass_through() {
        let err = AnalyzerError::from(LlmError::Communication("API Down".to_string()));
        assert_eq!(err.to_string(), "Error interacting with OpenAI API: API Down");

        let err = AnalyzerError::from(ExtractionError::from(io::Error::new(
            io::ErrorKind::NotFound,
            "gone",
        )));
        assert_eq!(err.to_string(), "Error extracting text: gone");
    }

    #[test]
    fn test_into_record() {
        let record = AnalyzerError::TextTooLong(10, 5).into_record();
        assert!(record.reasoning.starts_with("Error"));
        assert!(record.reasoning.contains("10 chars"));
        assert_eq!(record.summary, NOT_AVAILABLE);
        assert_eq!(record.recommendation, Recommendation::Uncertain);
    }
}
