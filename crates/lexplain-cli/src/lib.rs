//! Lexplain CLI library: argument parsing, document loading, and output.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
