//! Pipeline orchestration: chunk, extract per chunk, reduce

use crate::chunking::chunk_text;
use crate::config::PipelineConfig;
use crate::error::SimplifyError;
use crate::extractor::extract_chunk;
use crate::reducer::merge_results;
use crate::types::FinalResult;
use lexplain_llm::ChatCompleter;
use tracing::info;

/// The Simplifier runs the full document pipeline
///
/// Extraction calls are issued strictly sequentially, in chunk order, with a
/// fixed pacing delay after each successful chunk for rate-limit courtesy.
/// Cancellation works at the caller level: wrap `simplify` in
/// `tokio::time::timeout` or drop the future; nothing partial is persisted.
pub struct Simplifier<L: ChatCompleter> {
    llm: L,
    config: PipelineConfig,
}

impl<L: ChatCompleter> Simplifier<L> {
    /// Create a new Simplifier around an LLM collaborator
    pub fn new(llm: L, config: PipelineConfig) -> Self {
        Self { llm, config }
    }

    /// The active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Simplify a whole document
    ///
    /// # Errors
    ///
    /// Returns `SimplifyError::Config` for invalid chunking parameters
    /// (before any network call) and `SimplifyError::Extraction` when any
    /// chunk exhausts its retry budget; in that case no result is produced
    /// for the remaining chunks.
    pub async fn simplify(&self, text: &str) -> Result<FinalResult, SimplifyError> {
        self.config.validate().map_err(SimplifyError::Config)?;

        let chunks = chunk_text(text, self.config.max_chars, self.config.overlap)?;
        info!("Split document into {} chunks", chunks.len());

        let mut results = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            info!(
                "Summarizing chunk {}/{} (len={})",
                idx + 1,
                chunks.len(),
                chunk.chars().count()
            );
            let result = extract_chunk(&self.llm, chunk, idx + 1, &self.config).await?;
            results.push(result);

            // Throttle between calls to respect external rate limits
            tokio::time::sleep(self.config.throttle()).await;
        }

        Ok(merge_results(&self.llm, &results, &self.config).await)
    }
}
