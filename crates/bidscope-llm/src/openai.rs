//! OpenAI Provider Implementation
//!
//! Sends a system message and a user prompt to the chat-completions endpoint
//! and returns the first choice's content, trimmed.
//!
//! # Features
//!
//! - Blocking HTTP call (one request per analysis)
//! - Configurable endpoint, model and timeout
//! - Optional retries with exponential backoff (off by default)
//!
//! # Examples
//!
//! ```no_run
//! use bidscope_llm::OpenAiProvider;
//! use bidscope_domain::traits::LlmProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-3.5-turbo").unwrap();
//! let reply = provider.generate_with_system("You are terse.", "Say hello");
//! ```

use crate::LlmError;
use bidscope_domain::traits::LlmProvider as LlmProviderTrait;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default OpenAI API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default timeout for a completion request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts (a single call, no retry)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Connection settings for the OpenAI provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API base URL, without the `/chat/completions` suffix
    pub endpoint: String,

    /// Chat model name
    pub model: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Total attempts for retryable failures (transport, 429, 5xx)
    pub max_attempts: u32,

    /// Sampling temperature; the service default is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            temperature: None,
        }
    }
}

impl OpenAiConfig {
    /// Check the settings before a provider is built from them
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.endpoint.trim().is_empty() {
            return Err(LlmError::Config("endpoint must not be empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::Config("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(LlmError::Config(
                "max_attempts must be greater than 0".to_string(),
            ));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(LlmError::Config(format!(
                    "temperature must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
        }
        Ok(())
    }
}

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    api_key: String,
    config: OpenAiConfig,
    client: Client,
}

/// Request body for the chat-completions API
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a provider for `model` with default connection settings
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let config = OpenAiConfig {
            model: model.into(),
            ..OpenAiConfig::default()
        };
        Self::with_config(api_key, config)
    }

    /// Create a provider from explicit connection settings
    ///
    /// The API key is not checked here; an empty key fails on first use
    /// without any network activity.
    pub fn with_config(api_key: impl Into<String>, config: OpenAiConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into(),
            config,
            client,
        })
    }

    /// Model used for completions
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Connection settings in use
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Run a chat completion, retrying retryable failures
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is empty (no request is made)
    /// - The service cannot be reached
    /// - The key is rejected, the model is unknown, or the quota is exhausted
    /// - The response has no usable content
    pub fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            warn!("Completion requested without an API key");
            return Err(LlmError::MissingApiKey);
        }

        let mut messages = Vec::with_capacity(2);
        if !system.is_empty() {
            messages.push(ChatMessage { role: "system", content: system });
        }
        messages.push(ChatMessage { role: "user", content: prompt });

        let request_body = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        let max_attempts = self.config.max_attempts.max(1);
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.send(&request_body) {
                Ok(content) => return Ok(content),
                Err(e) if e.is_retryable() && attempts < max_attempts => {
                    // Exponential backoff: 1s, 2s, 4s, etc.
                    let delay = Duration::from_secs(2u64.pow(attempts - 1));
                    warn!("Attempt {}/{} failed ({}), retrying in {:?}", attempts, max_attempts, e, delay);
                    std::thread::sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn send(&self, request_body: &ChatRequest<'_>) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'));
        debug!("POST {} (model {})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request_body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(self.status_error(status, &body));
        }

        let chat: ChatResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
    }

    fn status_error(&self, status: StatusCode, body: &str) -> LlmError {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(detail),
            StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.config.model.clone()),
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            s if s.is_server_error() => LlmError::Communication(format!("HTTP {}: {}", s, detail)),
            s => LlmError::Other(format!("HTTP {}: {}", s, detail)),
        }
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.complete("", prompt)
    }

    fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.complete(system, prompt)
    }
}
