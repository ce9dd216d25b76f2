//! LLM prompt construction for simplification and merging

use lexplain_llm::ChatMessage;

const CHUNK_SYSTEM: &str =
    "You are a precise legal assistant that always returns strict JSON.";

const MERGE_SYSTEM: &str = "You are an expert editor that produces one final JSON.";

/// Build the message list asking the LLM to simplify one chunk
///
/// The model is instructed to return only a JSON object with `summary` and
/// `stress_points` keys.
pub fn chunk_messages(chunk: &str, language: &str) -> Vec<ChatMessage> {
    let user_prompt = format!(
        r#"Simplify the following legal text into plain {language} for a non-lawyer.
Return ONLY a JSON object with two keys:
  "summary": a short, clear summary (3-6 short paragraphs max),
  "stress_points": an array of short bullet strings capturing obligations, risks, or key disputes.

Text:
-----
{chunk}
-----
"#
    );

    vec![ChatMessage::system(CHUNK_SYSTEM), ChatMessage::user(user_prompt)]
}

/// Build the message list asking the LLM to merge per-chunk results
///
/// `serialized_results` is the JSON serialization of the ordered chunk
/// result list.
pub fn merge_messages(serialized_results: &str) -> Vec<ChatMessage> {
    let user_prompt = format!(
        r#"Merge the following list of JSON objects (each has keys 'summary' and 'stress_points')
into a single JSON with this structure:

{{
  "simplified_summary": "...",
  "stress_points": ["...", "..."]
}}

Input:
{serialized_results}

Return only valid JSON.
"#
    );

    vec![ChatMessage::system(MERGE_SYSTEM), ChatMessage::user(user_prompt)]
}
