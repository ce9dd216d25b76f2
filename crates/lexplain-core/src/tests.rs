//! End-to-end pipeline tests over the mock LLM collaborator

use crate::config::PipelineConfig;
use crate::error::SimplifyError;
use crate::simplify::Simplifier;
use lexplain_llm::MockCompleter;

fn chunk_reply(summary: &str, points: &[&str]) -> String {
    serde_json::json!({
        "summary": summary,
        "stress_points": points,
    })
    .to_string()
}

#[tokio::test(start_paused = true)]
async fn three_chunk_document_with_failed_merge_uses_fallback() {
    // 25,000 chars with max_chars=12000, overlap=500 → chunks of
    // 12000, 12000, and the 2000-char remainder
    let text = "a".repeat(25_000);

    let llm = MockCompleter::new("merge output with no braces at all");
    llm.push_text(chunk_reply("First part.", &["A", "B"]));
    llm.push_text(chunk_reply("Second part.", &["A", "  ", "C"]));
    llm.push_text(chunk_reply("Third part.", &["B"]));

    let simplifier = Simplifier::new(llm.clone(), PipelineConfig::default());
    let result = simplifier.simplify(&text).await.unwrap();

    // Fallback merge: chunk summaries joined by a blank line, in order
    assert_eq!(
        result.simplified_summary,
        "First part.\n\nSecond part.\n\nThird part."
    );
    // Stress points deduplicated in first-occurrence order, blanks dropped
    assert_eq!(result.stress_points, vec!["A", "B", "C"]);
    // Three extraction calls plus one merge attempt
    assert_eq!(llm.call_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn three_chunk_document_with_successful_merge() {
    let text = "b".repeat(25_000);

    let llm = MockCompleter::new("unused default");
    llm.push_text(chunk_reply("s1", &["p1"]));
    llm.push_text(chunk_reply("s2", &["p2"]));
    llm.push_text(chunk_reply("s3", &["p3"]));
    llm.push_text(r#"{"simplified_summary": "One merged summary.", "stress_points": ["p1", "p2"]}"#);

    let simplifier = Simplifier::new(llm.clone(), PipelineConfig::default());
    let result = simplifier.simplify(&text).await.unwrap();

    assert_eq!(result.simplified_summary, "One merged summary.");
    assert_eq!(result.stress_points, vec!["p1", "p2"]);
    assert_eq!(llm.call_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn failing_middle_chunk_aborts_the_run() {
    let text = "c".repeat(25_000);

    let llm = MockCompleter::new("garbage that never parses");
    llm.push_text(chunk_reply("first ok", &[]));
    // Nothing else scripted: chunk 2 gets the unparseable default on all
    // four attempts and exhausts its budget; chunk 3 is never attempted

    let simplifier = Simplifier::new(llm.clone(), PipelineConfig::default());
    let result = simplifier.simplify(&text).await;

    match result {
        Err(SimplifyError::Extraction {
            chunk, attempts, ..
        }) => {
            assert_eq!(chunk, 2);
            assert_eq!(attempts, 4);
        }
        other => panic!("Expected Extraction error for chunk 2, got {:?}", other),
    }
    // One call for chunk 1, four for chunk 2, none for chunk 3 or the merge
    assert_eq!(llm.call_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn empty_document_produces_one_empty_chunk_run() {
    let llm = MockCompleter::new(chunk_reply("Nothing to summarize.", &[]));

    let simplifier = Simplifier::new(llm.clone(), PipelineConfig::default());
    let result = simplifier.simplify("   \n  ").await.unwrap();

    assert_eq!(result.simplified_summary, "Nothing to summarize.");
    assert!(result.stress_points.is_empty());
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn run_can_be_cancelled_by_caller_timeout() {
    // An always-failing extraction spends 7s in backoff per chunk; a 2s
    // caller timeout must cut the run short
    let text = "d".repeat(25_000);
    let llm = MockCompleter::new("not json");
    let simplifier = Simplifier::new(llm, PipelineConfig::default());

    let result =
        tokio::time::timeout(std::time::Duration::from_secs(2), simplifier.simplify(&text)).await;
    assert!(result.is_err());
}
