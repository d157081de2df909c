use std::path::Path;

use crate::error::CheckError;
use crate::report::model::Diagnostic;
use crate::rules::catalog::Level;

/// `<LEVEL> <path>: <message>`
pub fn render_text(diag: &Diagnostic) -> String {
    format!("{} {}: {}", diag.level, diag.path.display(), diag.message)
}

/// One JSON object per diagnostic, for machine consumers.
pub fn render_json(diag: &Diagnostic) -> serde_json::Result<String> {
    serde_json::to_string(diag)
}

/// A per-file failure in the same one-line shape as a diagnostic.
pub fn render_failure(path: &Path, err: &CheckError) -> String {
    format!("{} {}: {}", Level::Error, path.display(), err)
}
