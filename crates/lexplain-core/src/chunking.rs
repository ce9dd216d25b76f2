//! Overlapping character-window chunking for long documents

use crate::error::SimplifyError;

/// Split a document into overlapping bounded-length chunks
///
/// The document is trimmed once, then cut into windows of at most
/// `max_chars` characters; each window starts `overlap` characters before
/// the previous window's end, so consecutive chunks share context. The final
/// window may be shorter. Indexing is by character, not byte, so multi-byte
/// UTF-8 is never split.
///
/// Text no longer than `max_chars` (including empty text) comes back as a
/// single chunk.
///
/// # Errors
///
/// Returns `SimplifyError::Config` when `max_chars` is zero or
/// `overlap >= max_chars` (the cursor could not advance).
pub fn chunk_text(text: &str, max_chars: usize, overlap: usize) -> Result<Vec<String>, SimplifyError> {
    if max_chars == 0 {
        return Err(SimplifyError::Config(
            "max_chars must be greater than 0".to_string(),
        ));
    }
    if overlap >= max_chars {
        return Err(SimplifyError::Config(format!(
            "overlap ({}) must be less than max_chars ({})",
            overlap, max_chars
        )));
    }

    let trimmed = text.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= max_chars {
        return Ok(vec![trimmed.to_string()]);
    }

    let step = max_chars - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + max_chars).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += step;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_text_returns_single_chunk() {
        let chunks = chunk_text("Short text here.", 100, 10).unwrap();
        assert_eq!(chunks, vec!["Short text here.".to_string()]);
    }

    #[test]
    fn test_small_text_is_trimmed() {
        let chunks = chunk_text("  padded  \n", 100, 10).unwrap();
        assert_eq!(chunks, vec!["padded".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        let chunks = chunk_text("", 100, 10).unwrap();
        assert_eq!(chunks, vec!["".to_string()]);
    }

    #[test]
    fn test_chunk_sizes_and_count() {
        let text = "a".repeat(25_000);
        let chunks = chunk_text(&text, 12_000, 500).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 12_000);
        assert_eq!(chunks[1].len(), 12_000);
        assert_eq!(chunks[2].len(), 2_000);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let text: String = (0..30_000u32)
            .map(|i| char::from_digit(i % 10, 10).unwrap())
            .collect();
        let chunks = chunk_text(&text, 12_000, 500).unwrap();

        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 500).collect();
            let head: String = pair[1].chars().take(500).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_chunks_cover_whole_document() {
        let text: String = "The quick brown fox jumps over the lazy dog. ".repeat(700);
        let trimmed = text.trim().to_string();
        let overlap = 500;
        let chunks = chunk_text(&text, 12_000, overlap).unwrap();

        // Drop each chunk's leading overlap (except the first) and
        // concatenate; the result must reconstruct the trimmed text.
        let mut reconstructed = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                reconstructed.push_str(chunk);
            } else {
                reconstructed.extend(chunk.chars().skip(overlap));
            }
        }
        assert_eq!(reconstructed, trimmed);
    }

    #[test]
    fn test_overlap_equal_to_max_chars_fails_fast() {
        let text = "a".repeat(1000);
        let result = chunk_text(&text, 100, 100);
        assert!(matches!(result, Err(SimplifyError::Config(_))));
    }

    #[test]
    fn test_overlap_above_max_chars_fails_fast() {
        let result = chunk_text("text", 100, 150);
        assert!(matches!(result, Err(SimplifyError::Config(_))));
    }

    #[test]
    fn test_zero_max_chars_fails() {
        let result = chunk_text("text", 0, 0);
        assert!(matches!(result, Err(SimplifyError::Config(_))));
    }

    #[test]
    fn test_multibyte_text_is_not_split_mid_codepoint() {
        // Each char is 2 bytes in UTF-8; byte slicing would panic here
        let text = "§".repeat(250);
        let chunks = chunk_text(&text, 100, 10).unwrap();

        assert!(chunks.len() > 1);
        assert_eq!(chunks[0].chars().count(), 100);
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        let overlapped = (chunks.len() - 1) * 10;
        assert_eq!(total - overlapped, 250);
    }

    #[test]
    fn test_zero_overlap_is_valid() {
        let text = "a".repeat(250);
        let chunks = chunk_text(&text, 100, 0).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 50);
    }
}
