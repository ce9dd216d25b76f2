//! Error types for the simplification pipeline

use thiserror::Error;

/// Errors that can occur during document simplification
#[derive(Error, Debug)]
pub enum SimplifyError {
    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A chunk's extraction exhausted its retry budget
    ///
    /// `chunk` is 1-based. `detail` carries the last raw model output or
    /// transport error, truncated for diagnostics.
    #[error("Chunk {chunk} failed after {attempts} attempts: {detail}")]
    Extraction {
        /// 1-based index of the failing chunk
        chunk: usize,
        /// Number of attempts made before giving up
        attempts: u32,
        /// Truncated raw output or error from the last attempt
        detail: String,
    },
}
