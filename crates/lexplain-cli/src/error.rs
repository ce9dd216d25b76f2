//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported document format
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// LLM collaborator error
    #[error("LLM error: {0}")]
    Llm(#[from] lexplain_llm::LlmError),

    /// Pipeline error
    #[error(transparent)]
    Simplify(#[from] lexplain_core::SimplifyError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
