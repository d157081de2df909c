//! Script-vs-library consistency check for Python source files.
//!
//! Pipeline per file: read → shebang + parse → exec-bit probe → signals →
//! decision table → [`Diagnostic`].

pub mod batch;
pub mod config;
pub mod error;
pub mod exec;
pub mod python;
pub mod report;
pub mod rules;
pub mod signals;
pub mod util;

use std::path::Path;

use crate::exec::{ExecBit, ExecBitProbe};
use crate::python::{parse::parse_outline, read::read_source, shebang::shebang_line};
use crate::rules::eval::evaluate;
use crate::rules::shebangs::KnownShebangs;
use crate::signals::extract::extract_signals;

pub use crate::config::CheckConfig;
pub use crate::error::{CheckError, ErrorKind};
pub use crate::report::model::Diagnostic;
pub use crate::rules::catalog::{Level, Verdict};
pub use crate::signals::model::ScriptLibFlags;

pub const TOOL_NAME: &str = "svlcheck";

/// Check one file using the exec-bit source selected in `config`.
pub fn check_script_vs_lib(path: &Path, config: &CheckConfig) -> Result<Diagnostic, CheckError> {
    let probe = config.exec_bit.probe();
    check_with_probe(path, &config.known_shebangs, probe.as_ref())
}

/// Check one file with an explicitly supplied exec-bit probe.
pub fn check_with_probe(
    path: &Path,
    known_shebangs: &KnownShebangs,
    probe: &dyn ExecBitProbe,
) -> Result<Diagnostic, CheckError> {
    let source = read_source(path)?;
    let exec_bit = probe.observe(path, &source.metadata)?;
    classify_source(path, &source.text, exec_bit, known_shebangs)
}

/// Classify already-loaded source text. Performs no I/O.
pub fn classify_source(
    path: &Path,
    text: &str,
    exec_bit: ExecBit,
    known_shebangs: &KnownShebangs,
) -> Result<Diagnostic, CheckError> {
    let outline = parse_outline(text, path)?;
    let signals = extract_signals(&outline, shebang_line(text), exec_bit);
    let outcome = evaluate(&signals, known_shebangs);

    tracing::debug!(
        path = %path.display(),
        flags = %signals.flags,
        verdict = %outcome.verdict,
        "classified"
    );

    Ok(Diagnostic::new(path, outcome, signals))
}
