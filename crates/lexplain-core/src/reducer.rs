//! Reduce per-chunk results into one consolidated result

use crate::config::PipelineConfig;
use crate::parser::parse_final_result;
use crate::prompt;
use crate::types::{ChunkResult, FinalResult};
use lexplain_llm::{ChatCompleter, CompletionParams};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Sampling temperature for the merge call
const MERGE_TEMPERATURE: f32 = 0.1;

/// Output cap for the merge call
const MERGE_MAX_TOKENS: u32 = 1500;

/// Merge an ordered list of chunk results into one `FinalResult`
///
/// Never fails outward. Multi-chunk input goes through a single LLM merge
/// call; if the response cannot be parsed into the expected shape, or the
/// call itself fails, the deterministic [`fallback_merge`] takes over. A
/// single chunk has nothing to merge and short-circuits straight to the
/// fallback path without an LLM call.
pub async fn merge_results<L: ChatCompleter>(
    llm: &L,
    results: &[ChunkResult],
    config: &PipelineConfig,
) -> FinalResult {
    if results.len() <= 1 {
        debug!("Single chunk result, skipping merge call");
        return fallback_merge(results);
    }

    let serialized = match serde_json::to_string(results) {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not serialize chunk results for merge: {}", e);
            return fallback_merge(results);
        }
    };

    let messages = prompt::merge_messages(&serialized);
    let params = CompletionParams::for_model(&config.model)
        .with_temperature(MERGE_TEMPERATURE)
        .with_max_tokens(MERGE_MAX_TOKENS);

    match llm.complete(&messages, &params).await {
        Ok(raw) => {
            if let Some(merged) = parse_final_result(&raw) {
                return merged;
            }
            warn!("Merge response was not parseable, using deterministic fallback");
        }
        Err(e) => {
            warn!("Merge call failed ({}), using deterministic fallback", e);
        }
    }

    fallback_merge(results)
}

/// Deterministically combine chunk results without an LLM
///
/// Summaries are joined with a blank line in chunk order. Stress points are
/// concatenated in chunk order, trimmed, blank entries dropped, and
/// deduplicated by exact string equality with first-occurrence order
/// preserved. Pure function of its input.
pub fn fallback_merge(results: &[ChunkResult]) -> FinalResult {
    let simplified_summary = results
        .iter()
        .map(|r| r.summary.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut seen = HashSet::new();
    let mut stress_points = Vec::new();
    for result in results {
        for point in &result.stress_points {
            let point = point.trim();
            if point.is_empty() {
                continue;
            }
            if seen.insert(point.to_string()) {
                stress_points.push(point.to_string());
            }
        }
    }

    FinalResult {
        simplified_summary,
        stress_points,
    }
}
