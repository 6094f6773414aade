//! Error types for the CLI application.

use bidscope_analyzer::AnalyzerError;
use bidscope_ingest::ExtractionError;
use bidscope_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key from flag, environment or config file
    #[error(
        "OpenAI API Key not found. Please set OPENAI_API_KEY environment variable or provide it with --api-key."
    )]
    MissingApiKey,

    /// Analysis pipeline error
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// Analysis failed; carries the message rendered as the record's reasoning
    #[error("{0}")]
    AnalysisFailed(String),

    /// Text extraction error
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// LLM provider error
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Message for stderr, adding an `Error: ` prefix unless already present
    pub fn report(&self) -> String {
        let message = self.to_string();
        if message.starts_with("Error") {
            message
        } else {
            format!("Error: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_adds_prefix_once() {
        assert_eq!(
            CliError::InvalidInput("no file".to_string()).report(),
            "Error: Invalid input: no file"
        );
        assert_eq!(
            CliError::from(LlmError::Communication("API Down".to_string())).report(),
            "Error interacting with OpenAI API: API Down"
        );
        assert!(CliError::MissingApiKey
            .report()
            .starts_with("Error: OpenAI API Key not found."));
    }
}
