//! Parse structured output from untrusted LLM responses

use crate::types::{ChunkResult, FinalResult};
use tracing::debug;

/// Locate the outermost JSON object substring of a raw model response
///
/// LLMs are not trusted to return only JSON; prose or markdown fences around
/// the object are tolerated by slicing from the first `{` to the last `}`.
/// Returns `None` when no such span exists.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    // Braces are ASCII, so these byte offsets are char boundaries.
    Some(&raw[start..=end])
}

/// Parse a raw chunk response into a `ChunkResult`
///
/// Returns `None` when no JSON object is found or the object does not match
/// the expected shape; callers treat that as a retryable failure.
pub fn parse_chunk_result(raw: &str) -> Option<ChunkResult> {
    let candidate = extract_json_object(raw)?;
    match serde_json::from_str(candidate) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!("Chunk response rejected: {}", e);
            None
        }
    }
}

/// Parse a raw merge response into a `FinalResult`
///
/// Shape validation is strict: both `simplified_summary` and `stress_points`
/// must be present with the right types, otherwise the caller falls back to
/// the deterministic merge.
pub fn parse_final_result(raw: &str) -> Option<FinalResult> {
    let candidate = extract_json_object(raw)?;
    match serde_json::from_str(candidate) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!("Merge response rejected: {}", e);
            None
        }
    }
}
