//! End-to-end application flow shared by the binary and its tests.

use crate::error::Result;
use crate::loader;
use crate::output;
use lexplain_core::{FinalResult, PipelineConfig, Simplifier};
use lexplain_llm::ChatCompleter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load a document, simplify it, and write the JSON artifact beside it.
///
/// Returns the path written together with the final result. On any failure
/// the error propagates and no output file is written.
pub async fn run_pipeline<L: ChatCompleter>(
    llm: L,
    config: PipelineConfig,
    file: &Path,
) -> Result<(PathBuf, FinalResult)> {
    let text = loader::load_document(file)?;
    info!("Document length: {} chars", text.chars().count());

    let simplifier = Simplifier::new(llm, config);
    let result = simplifier.simplify(&text).await?;

    let out_path = output::write_result(file, &result)?;
    info!("Saved simplified output to {}", out_path.display());

    Ok((out_path, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use lexplain_core::SimplifyError;
    use lexplain_llm::MockCompleter;
    use std::fs;

    #[tokio::test(start_paused = true)]
    async fn test_successful_run_writes_artifact_beside_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lease.txt");
        fs::write(&input, "A short lease agreement.").unwrap();

        let llm = MockCompleter::new(r#"{"summary": "plain", "stress_points": ["one risk"]}"#);
        let (out_path, result) = run_pipeline(llm, PipelineConfig::default(), &input)
            .await
            .unwrap();

        assert_eq!(out_path, dir.path().join("lease_simplified.json"));
        assert_eq!(result.simplified_summary, "plain");

        let written: FinalResult =
            serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(written, result);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_run_writes_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contract.txt");
        fs::write(&input, "a".repeat(25_000)).unwrap();

        // Chunk 1 succeeds; chunk 2 gets unparseable output on every attempt
        let llm = MockCompleter::new("garbage that never parses");
        llm.push_text(r#"{"summary": "first ok", "stress_points": []}"#);

        let result = run_pipeline(llm, PipelineConfig::default(), &input).await;

        match result {
            Err(CliError::Simplify(SimplifyError::Extraction { chunk, .. })) => {
                assert_eq!(chunk, 2)
            }
            other => panic!("Expected Extraction error for chunk 2, got {:?}", other),
        }
        assert!(!output::output_path(&input).exists());
    }

    #[tokio::test]
    async fn test_unsupported_input_never_reaches_the_llm() {
        let llm = MockCompleter::new("unused");
        let result = run_pipeline(
            llm.clone(),
            PipelineConfig::default(),
            Path::new("contract.pdf"),
        )
        .await;

        assert!(matches!(result, Err(CliError::UnsupportedFormat(_))));
        assert_eq!(llm.call_count(), 0);
    }
}
