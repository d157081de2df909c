//! Batch driver: enumerate candidate files, check each one and count issues.
//!
//! Policy:
//!
//!   - shown  → level ≥ WARNING, or verbose, or notices and level ≥ NOTICE
//!   - issue  → level ≥ WARNING, or notices and level ≥ NOTICE
//!   - input and parse errors are shown and counted, and the batch continues
//!   - metadata-query errors abort the batch
//!
//! The exit status is the issue count, saturating at 255.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::python::PYTHON_EXTENSION;
use crate::report::model::Diagnostic;
use crate::rules::catalog::Level;
use crate::util::deterministic::dedup_preserving_order;

/// Largest exit status a process can report.
pub const MAX_EXIT_CODE: i32 = 255;

/// Which diagnostics are printed and which count as issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportPolicy {
    /// Show everything down to INFO.
    pub verbose: bool,
    /// Show NOTICE diagnostics and count them as issues.
    pub notices: bool,
}

impl ReportPolicy {
    pub fn shows(&self, level: Level) -> bool {
        level >= Level::Warning || self.verbose || (self.notices && level >= Level::Notice)
    }

    pub fn counts(&self, level: Level) -> bool {
        level >= Level::Warning || (self.notices && level >= Level::Notice)
    }
}

/// Something the batch wants the caller to print.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Diagnostic(&'a Diagnostic),
    Failure(&'a Path, &'a CheckError),
}

/// Totals for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub checked: usize,
    pub failed: usize,
    pub issues: usize,
}

impl BatchSummary {
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.issues)
            .unwrap_or(MAX_EXIT_CODE)
            .min(MAX_EXIT_CODE)
    }
}

pub fn has_python_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PYTHON_EXTENSION))
}

/// Expand `roots` into the list of files to check.
///
/// Directories are walked recursively in file-name order without following
/// symlinks, keeping regular `.py` files. Named files are kept if they have
/// the `.py` extension, whether or not they exist, so a missing `.py` path
/// is reported by the check. Any other named path is skipped with a
/// warning. An empty `roots` means the current directory.
pub fn collect_candidates(roots: &[PathBuf]) -> Vec<PathBuf> {
    let default_root = [PathBuf::from(".")];
    let roots = if roots.is_empty() {
        &default_root[..]
    } else {
        roots
    };

    let mut out = Vec::new();
    for root in roots {
        if root.is_dir() {
            walk_dir(root, &mut out);
        } else if has_python_extension(root) {
            out.push(root.clone());
        } else {
            tracing::warn!(path = %root.display(), "skipping file without .py extension");
        }
    }

    dedup_preserving_order(out)
}

fn walk_dir(root: &Path, out: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        match entry {
            Ok(e) if e.file_type().is_file() && has_python_extension(e.path()) => {
                out.push(e.into_path());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
            }
        }
    }
}

/// Check every candidate under `roots`, handing printable events to `emit`.
pub fn run_batch(
    roots: &[PathBuf],
    config: &CheckConfig,
    policy: ReportPolicy,
    mut emit: impl FnMut(BatchEvent<'_>),
) -> Result<BatchSummary, CheckError> {
    let probe = config.exec_bit.probe();
    let mut summary = BatchSummary::default();

    for path in collect_candidates(roots) {
        match crate::check_with_probe(&path, &config.known_shebangs, probe.as_ref()) {
            Ok(diag) => {
                summary.checked += 1;
                if policy.shows(diag.level) {
                    emit(BatchEvent::Diagnostic(&diag));
                }
                if policy.counts(diag.level) {
                    summary.issues += 1;
                }
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "check failed");
                summary.failed += 1;
                summary.issues += 1;
                emit(BatchEvent::Failure(&path, &err));
            }
        }
    }

    tracing::debug!(
        checked = summary.checked,
        failed = summary.failed,
        issues = summary.issues,
        "batch finished"
    );

    Ok(summary)
}
