//! Lexplain Core
//!
//! Chunk-and-merge orchestration for plain-language simplification of long
//! legal documents.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → per-chunk Extractor (LLM) → Reducer → FinalResult
//! ```
//!
//! # Key Features
//!
//! - **Overlapping chunking**: bounded character windows that fully cover
//!   the document while sharing context at the seams
//! - **Structured extraction**: per-chunk LLM calls that coerce near-valid
//!   output into strict JSON, with bounded retries and backoff
//! - **Graceful reduction**: an LLM merge pass that degrades to a pure,
//!   deterministic fallback when the merge output is unparsable
//! - **Sequential pacing**: one in-flight call at a time plus a throttle
//!   delay, bounding load on the external collaborator
//!
//! # Example Usage
//!
//! ```no_run
//! use lexplain_core::{PipelineConfig, Simplifier};
//! use lexplain_llm::GroqClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GroqClient::from_env()?;
//! let simplifier = Simplifier::new(llm, PipelineConfig::default());
//!
//! let result = simplifier.simplify("WHEREAS, the party of the first part...").await?;
//!
//! println!("{}", result.simplified_summary);
//! for point in &result.stress_points {
//!     println!("- {}", point);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod reducer;
mod simplify;
mod types;

#[cfg(test)]
mod tests;

pub use chunking::chunk_text;
pub use config::{PipelineConfig, DEFAULT_LANGUAGE, DEFAULT_MODEL};
pub use error::SimplifyError;
pub use reducer::fallback_merge;
pub use simplify::Simplifier;
pub use types::{ChunkResult, FinalResult};
