//! Bidscope Analyzer
//!
//! Turns a call-for-tenders document into a structured go/no-go analysis.
//!
//! # Architecture
//!
//! ```text
//! File → TextExtractor → PromptBuilder → LlmProvider → parser → AnalysisRecord
//! ```
//!
//! # Key Features
//!
//! - **Prompting**: a fixed five-heading template the parser understands
//! - **Tolerant parsing**: a line scanner for well-formed replies plus a
//!   pattern fallback for replies whose headings are not on their own lines
//! - **Verdict normalisation**: free text folded into GO / NO-GO / UNCERTAIN
//! - **Failure records**: every upstream error can be rendered as a record
//!
//! # Example Usage
//!
//! ```no_run
//! use bidscope_analyzer::{Analyzer, AnalyzerConfig};
//! use bidscope_ingest::DocumentExtractor;
//! use bidscope_llm::OpenAiProvider;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = OpenAiProvider::new("sk-...", "gpt-3.5-turbo")?;
//! let analyzer = Analyzer::new(llm, DocumentExtractor::new(), AnalyzerConfig::default())
//!     .with_model_name("gpt-3.5-turbo");
//!
//! let report = analyzer.analyze_file(Path::new("tender.pdf"))?;
//! if let Some(record) = &report.record {
//!     println!("Recommendation: {}", record.recommendation);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
pub mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::{
    parse_llm_outcome, parse_llm_response, parse_with_diagnostics, ParseOutcome, ResponseParser,
};
pub use prompt::{PromptBuilder, SYSTEM_PROMPT};
pub use types::{AnalysisMetadata, AnalysisReport};
