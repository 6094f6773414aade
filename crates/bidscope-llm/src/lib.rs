//! Bidscope LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `bidscope-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat-completions API
//!
//! # Examples
//!
//! ```
//! use bidscope_llm::MockProvider;
//! use bidscope_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("**Summary:** A bridge");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "**Summary:** A bridge");
//! ```

#![warn(missing_docs)]

pub mod openai;

use bidscope_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::{OpenAiConfig, OpenAiProvider};

/// Prefix carried by every failure of the completion service
pub const SERVICE_ERROR_PREFIX: &str = "Error interacting with OpenAI API:";

/// Errors that can occur during LLM operations
///
/// The display form is what the user sees in place of an analysis, so each
/// message keeps a recognisable prefix.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was supplied; no request was attempted
    #[error("Error: OpenAI API Key is missing.")]
    MissingApiKey,

    /// Network or transport failure, or a server-side error status
    #[error("Error interacting with OpenAI API: {0}")]
    Communication(String),

    /// The API key was rejected
    #[error("Error interacting with OpenAI API: authentication failed: {0}")]
    Authentication(String),

    /// Rate limit or quota exceeded
    #[error("Error interacting with OpenAI API: rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Error interacting with OpenAI API: model not available: {0}")]
    ModelNotAvailable(String),

    /// Response body could not be understood
    #[error("Error interacting with OpenAI API: invalid response: {0}")]
    InvalidResponse(String),

    /// Provider settings are unusable; no request was attempted
    #[error("Error: invalid OpenAI configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("Error interacting with OpenAI API: {0}")]
    Other(String),
}

impl LlmError {
    /// Whether another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, LlmError::Communication(_) | LlmError::RateLimitExceeded)
    }
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use bidscope_llm::MockProvider;
/// use bidscope_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Some(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), None);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The last user prompt received
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.last_prompt).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_prompt) = Some(prompt.to_string());

        match lock(&self.responses).get(prompt) {
            Some(Some(response)) => Ok(response.clone()),
            Some(None) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }

    fn generate_with_system(&self, _system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }
}
