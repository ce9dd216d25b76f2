//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Lexplain - simplify a legal document into plain language.
#[derive(Debug, Parser)]
#[command(name = "lexplain")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the document to simplify (plain text)
    pub file: PathBuf,

    /// Target language for the simplified output
    #[arg(long = "lang")]
    pub language: Option<String>,

    /// Model identifier to request from the LLM backend
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum chunk size in characters
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Characters of context shared between consecutive chunks
    #[arg(long)]
    pub overlap: Option<usize>,

    /// API key for the LLM backend
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
