//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bidscope_analyzer::Analyzer;
use bidscope_ingest::DocumentExtractor;
use bidscope_llm::OpenAiProvider;
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // The key is checked before the document is touched
    let api_key = config.resolve_api_key(args.api_key.as_deref())?;
    config.analyzer.validate()?;
    config.llm.validate()?;

    let mut llm_config = config.llm.clone();
    if let Some(model) = args.model {
        llm_config.model = model;
    }
    let model_name = llm_config.model.clone();
    info!("Analyzing {} with {}", args.file.display(), model_name);

    let provider = OpenAiProvider::with_config(api_key, llm_config)?;
    let analyzer = Analyzer::new(provider, DocumentExtractor::new(), config.analyzer.clone())
        .with_model_name(model_name);

    match analyzer.analyze_file(&args.file) {
        Ok(report) => {
            println!("{}", formatter.format_report(&report, args.show_text)?);
            Ok(())
        }
        Err(e) => {
            let record = e.into_record();
            // JSON consumers still get the five fields, reasoning carrying the failure
            if formatter.format() == OutputFormat::Json {
                println!("{}", formatter.format_record(&record)?);
            }
            Err(CliError::AnalysisFailed(record.reasoning))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidscope_llm::LlmError;
    use std::path::PathBuf;

    #[test]
    fn test_missing_key_fails_before_extraction() {
        let args = AnalyzeArgs {
            file: PathBuf::from("/definitely/not/here.pdf"),
            api_key: None,
            model: None,
            show_text: false,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = execute_analyze(args, &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::MissingApiKey)));
    }

    #[test]
    fn test_invalid_analyzer_config() {
        let mut config = Config::default();
        config.analyzer.max_text_length = 0;
        let args = AnalyzeArgs {
            file: PathBuf::from("tender.txt"),
            api_key: Some("sk-test".to_string()),
            model: None,
            show_text: false,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = execute_analyze(args, &config, &formatter);
        assert!(matches!(result, Err(CliError::Analyzer(_))));
    }

    #[test]
    fn test_extraction_error_surfaces() {
        let args = AnalyzeArgs {
            file: PathBuf::from("/definitely/not/here.txt"),
            api_key: Some("sk-test".to_string()),
            model: None,
            show_text: false,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);

        let err = execute_analyze(args, &Config::default(), &formatter).unwrap_err();
        assert!(err.report().starts_with("Error extracting text: "));
    }

    #[test]
    fn test_json_failure_carries_record_reasoning() {
        let args = AnalyzeArgs {
            file: PathBuf::from("/definitely/not/here.txt"),
            api_key: Some("sk-test".to_string()),
            model: None,
            show_text: false,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);

        match execute_analyze(args, &Config::default(), &formatter) {
            Err(CliError::AnalysisFailed(reasoning)) => {
                assert!(reasoning.starts_with("Error extracting text: "))
            }
            other => panic!("Expected AnalysisFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_llm_config() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        let args = AnalyzeArgs {
            file: PathBuf::from("tender.txt"),
            api_key: Some("sk-test".to_string()),
            model: None,
            show_text: false,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = execute_analyze(args, &config, &formatter);
        assert!(matches!(result, Err(CliError::Llm(LlmError::Config(_)))));
    }
}
