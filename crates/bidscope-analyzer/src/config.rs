//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum extracted text length (characters) sent to the model
    pub max_text_length: usize,

    /// Re-scan replies without recognisable structure using section patterns
    pub fallback_enabled: bool,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_text_length == 0 {
            return Err(AnalyzerError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict preset: small documents only, line scan only
    pub fn strict() -> Self {
        Self {
            max_text_length: 50_000,
            fallback_enabled: false,
        }
    }

    /// Lenient preset: large documents for long-context models
    pub fn lenient() -> Self {
        Self {
            max_text_length: 1_000_000,
            fallback_enabled: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        toml::from_str(toml_str)
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_text_length: 200_000,
            fallback_enabled: true,
        }
    }
}
