use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic, ordered `Info < Notice < Warning < Error`.
///
/// Discriminants follow the `logging`-style numbering used by the report.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Info = 20,
    Notice = 25,
    Warning = 30,
    Error = 40,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every outcome the decision table can produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    UnrecognizedShebang,
    NameMainAndScriptLike,
    LibraryWithExecBit,
    NormalLibrary,
    ShebangWithoutScript,
    ScriptCouldUseNameMain,
    NormalScript,
    ScriptMissingMarks,
}

impl Verdict {
    pub fn level(self) -> Level {
        match self {
            Verdict::UnrecognizedShebang => Level::Warning,
            Verdict::NameMainAndScriptLike
            | Verdict::LibraryWithExecBit
            | Verdict::ShebangWithoutScript
            | Verdict::ScriptMissingMarks => Level::Error,
            Verdict::ScriptCouldUseNameMain => Level::Notice,
            Verdict::NormalLibrary | Verdict::NormalScript => Level::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::UnrecognizedShebang => "unrecognized_shebang",
            Verdict::NameMainAndScriptLike => "name_main_and_script_like",
            Verdict::LibraryWithExecBit => "library_with_exec_bit",
            Verdict::NormalLibrary => "normal_library",
            Verdict::ShebangWithoutScript => "shebang_without_script",
            Verdict::ScriptCouldUseNameMain => "script_could_use_name_main",
            Verdict::NormalScript => "normal_script",
            Verdict::ScriptMissingMarks => "script_missing_marks",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
