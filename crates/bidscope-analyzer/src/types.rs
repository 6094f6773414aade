//! Report types for an analysis run

use bidscope_domain::{AnalysisRecord, Section};
use std::path::PathBuf;

/// Result of analysing one document
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// File the text came from, if any
    pub source: Option<PathBuf>,

    /// Text sent (or that would have been sent) to the model
    pub extracted_text: String,

    /// Parsed analysis; `None` when the document yielded no text
    pub record: Option<AnalysisRecord>,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

impl AnalysisReport {
    /// Whether the model was consulted
    pub fn was_analyzed(&self) -> bool {
        self.record.is_some()
    }
}

/// Metadata about an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Name of the LLM model used
    pub model_name: String,

    /// Timestamp when the analysis finished (seconds since the epoch)
    pub timestamp: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Length of the extracted text in characters
    pub text_length: usize,

    /// Sections the line scan recognised
    pub sections_found: Vec<Section>,

    /// Whether the pattern fallback ran
    pub used_fallback: bool,
}
