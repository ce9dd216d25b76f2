//! Result types flowing through the pipeline

use serde::{Deserialize, Serialize};

/// Structured result for one chunk
///
/// Produced by the per-chunk extraction call, consumed by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResult {
    /// Short plain-language summary of the chunk
    pub summary: String,

    /// Obligations, risks, or disputed terms found in the chunk
    pub stress_points: Vec<String>,
}

/// Consolidated result for the whole document
///
/// The pipeline's sole externally visible output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    /// Plain-language summary of the whole document
    pub simplified_summary: String,

    /// Deduplicated stress points, first-occurrence order preserved
    pub stress_points: Vec<String>,
}
