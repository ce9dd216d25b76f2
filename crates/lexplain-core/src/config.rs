//! Configuration for the simplification pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default target language
pub const DEFAULT_LANGUAGE: &str = "English";

/// Configuration for the simplification pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Target language for the simplified output
    pub language: String,

    /// Model identifier passed to the LLM collaborator
    pub model: String,

    /// Maximum chunk size (characters)
    pub max_chars: usize,

    /// Characters of context shared between consecutive chunks
    pub overlap: usize,

    /// Total attempts per chunk extraction before giving up
    pub max_attempts: u32,

    /// Initial backoff between attempts (seconds)
    pub backoff_min_secs: u64,

    /// Backoff cap between attempts (seconds)
    pub backoff_max_secs: u64,

    /// Pacing delay after each chunk extraction (milliseconds)
    pub throttle_ms: u64,
}

impl PipelineConfig {
    /// Get the initial backoff as a Duration
    pub fn backoff_min(&self) -> Duration {
        Duration::from_secs(self.backoff_min_secs)
    }

    /// Get the backoff cap as a Duration
    pub fn backoff_max(&self) -> Duration {
        Duration::from_secs(self.backoff_max_secs)
    }

    /// Get the inter-chunk throttle as a Duration
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
        }
        if self.overlap >= self.max_chars {
            return Err(format!(
                "overlap ({}) must be less than max_chars ({})",
                self.overlap, self.max_chars
            ));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.backoff_min_secs > self.backoff_max_secs {
            return Err("backoff_min_secs cannot exceed backoff_max_secs".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Defaults matching the documented configuration surface
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_chars: 12_000,
            overlap: 500,
            max_attempts: 4,
            backoff_min_secs: 1,
            backoff_max_secs: 8,
            throttle_ms: 200,
        }
    }
}
