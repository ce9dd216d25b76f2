//! Configuration file handling for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use lexplain_core::{PipelineConfig, DEFAULT_LANGUAGE, DEFAULT_MODEL};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// CLI configuration, read from `~/.lexplain/config.toml` when present.
///
/// Every field is optional; command-line flags override file values, and
/// anything still unset falls back to the pipeline defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default target language
    pub language: Option<String>,

    /// Default model identifier
    pub model: Option<String>,

    /// Default maximum chunk size (characters)
    pub max_chars: Option<usize>,

    /// Default chunk overlap (characters)
    pub overlap: Option<usize>,

    /// Override for the API endpoint (OpenAI-compatible gateways)
    pub endpoint: Option<String>,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lexplain").join("config.toml"))
    }

    /// Load configuration from file, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the pipeline configuration: CLI flags win over file values,
    /// file values win over defaults.
    pub fn pipeline_config(&self, cli: &Cli) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            language: cli
                .language
                .clone()
                .or_else(|| self.language.clone())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            model: cli
                .model
                .clone()
                .or_else(|| self.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_chars: cli.max_chars.or(self.max_chars).unwrap_or(defaults.max_chars),
            overlap: cli.overlap.or(self.overlap).unwrap_or(defaults.overlap),
            ..defaults
        }
    }
}
