//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis pipeline and
//! infrastructure. Implementations live in other crates.

use std::path::Path;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (bidscope-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a single user prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate a completion with a system message preceding the user prompt
    fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for turning a document on disk into plain text
///
/// Implemented by the infrastructure layer (bidscope-ingest)
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract the text of the document at `path`
    ///
    /// Unsupported formats yield an empty string rather than an error.
    fn extract(&self, path: &Path) -> Result<String, Self::Error>;
}
