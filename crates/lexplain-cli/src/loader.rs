//! Document loading: the external-collaborator seam producing plain text.
//!
//! Only plain-text formats are read directly; anything else is rejected with
//! an unsupported-format error. PDF/DOCX extraction is out of scope for this
//! tool and belongs to whatever produced the text file.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;

/// Extensions read as plain text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Load a document as plain text.
///
/// Invalid UTF-8 bytes are replaced rather than rejected; legal documents
/// exported from other tools often carry stray encoding artifacts.
pub fn load_document(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CliError::UnsupportedFormat(format!(".{}", ext)));
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
