//! Output handling: JSON artifact and human-readable preview.

use crate::error::Result;
use colored::*;
use lexplain_core::FinalResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Compute the output path: `<stem>_simplified.json` beside the input.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{}_simplified.json", stem))
}

/// Write the final result beside the input document, pretty-printed.
///
/// serde_json leaves non-ASCII characters unescaped, so the output keeps
/// them literal. Returns the path written.
pub fn write_result(input: &Path, result: &FinalResult) -> Result<PathBuf> {
    let path = output_path(input);
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Human-readable preview formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render the summary and stress points for the terminal.
    pub fn preview(&self, result: &FinalResult) -> String {
        let mut out = String::new();

        out.push_str(&self.heading("=== Simplified Summary ==="));
        out.push('\n');
        out.push_str(&result.simplified_summary);
        out.push_str("\n\n");

        out.push_str(&self.heading("=== Stress Points ==="));
        out.push('\n');
        if result.stress_points.is_empty() {
            out.push_str("(none found)\n");
        } else {
            for point in &result.stress_points {
                out.push_str("- ");
                out.push_str(point);
                out.push('\n');
            }
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }
}
