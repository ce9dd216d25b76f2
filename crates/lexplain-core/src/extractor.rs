//! Per-chunk structured extraction with bounded retries

use crate::config::PipelineConfig;
use crate::error::SimplifyError;
use crate::parser::parse_chunk_result;
use crate::prompt;
use crate::types::ChunkResult;
use lexplain_llm::{ChatCompleter, CompletionParams};
use tracing::{debug, warn};

/// Sampling temperature for per-chunk simplification
const CHUNK_TEMPERATURE: f32 = 0.15;

/// Output cap for per-chunk simplification
const CHUNK_MAX_TOKENS: u32 = 1500;

/// Cap on raw output carried in diagnostics
const MAX_RAW_DIAGNOSTIC_CHARS: usize = 500;

/// Simplify one chunk into a structured `ChunkResult`
///
/// Issues one LLM call per attempt, up to `config.max_attempts` total.
/// Transport errors and unparseable responses are both retryable; delays
/// between attempts start at `config.backoff_min()` and double up to
/// `config.backoff_max()`. On exhaustion the terminal error carries the
/// 1-based `chunk_index` and the last raw output or error, truncated.
pub async fn extract_chunk<L: ChatCompleter>(
    llm: &L,
    chunk: &str,
    chunk_index: usize,
    config: &PipelineConfig,
) -> Result<ChunkResult, SimplifyError> {
    let messages = prompt::chunk_messages(chunk, &config.language);
    let params = CompletionParams::for_model(&config.model)
        .with_temperature(CHUNK_TEMPERATURE)
        .with_max_tokens(CHUNK_MAX_TOKENS);

    let mut delay = config.backoff_min();
    let mut last_detail = String::new();

    for attempt in 1..=config.max_attempts {
        match llm.complete(&messages, &params).await {
            Ok(raw) => {
                debug!(
                    "Chunk {} attempt {}: response length {} chars",
                    chunk_index,
                    attempt,
                    raw.len()
                );
                if let Some(result) = parse_chunk_result(&raw) {
                    return Ok(result);
                }
                last_detail = format!(
                    "Model did not return parseable JSON. Raw: {}",
                    truncate_chars(&raw, MAX_RAW_DIAGNOSTIC_CHARS)
                );
                warn!(
                    "Chunk {} attempt {}/{} returned unparseable output",
                    chunk_index, attempt, config.max_attempts
                );
            }
            Err(e) => {
                last_detail = truncate_chars(&e.to_string(), MAX_RAW_DIAGNOSTIC_CHARS);
                warn!(
                    "Chunk {} attempt {}/{} failed: {}",
                    chunk_index, attempt, config.max_attempts, last_detail
                );
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(config.backoff_max());
        }
    }

    Err(SimplifyError::Extraction {
        chunk: chunk_index,
        attempts: config.max_attempts,
        detail: last_detail,
    })
}

/// Truncate to at most `max` characters without splitting a code point
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
