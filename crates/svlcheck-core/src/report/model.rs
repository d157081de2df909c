use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::rules::catalog::{Level, Verdict};
use crate::rules::eval::Outcome;
use crate::signals::model::{ScriptLibFlags, Signals};

/// The result of checking one file.
///
/// The message is a deterministic function of the signals, so checking
/// byte-identical input twice yields equal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub level: Level,
    pub message: String,
    pub flags: ScriptLibFlags,
    pub verdict: Verdict,
    #[serde(skip)]
    pub signals: Signals,
}

impl Diagnostic {
    pub fn new(path: &Path, outcome: Outcome, signals: Signals) -> Self {
        Self {
            path: path.to_path_buf(),
            level: outcome.level,
            message: outcome.message,
            flags: signals.flags,
            verdict: outcome.verdict,
            signals,
        }
    }

    pub fn is_at_least(&self, level: Level) -> bool {
        self.level >= level
    }
}
