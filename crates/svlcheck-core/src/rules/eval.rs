//! The script-vs-library decision table.
//!
//! Rows are tried in order and the first match wins:
//!
//!   a. unrecognised shebang                 → WARNING
//!   b. NAME_MAIN and SCRIPT_LIKE            → ERROR
//!   c. no SHEBANG, NAME_MAIN, SCRIPT_LIKE   → INFO, or ERROR with EXEC_BIT
//!   d. SHEBANG only                         → ERROR
//!   e. exactly one of NAME_MAIN/SCRIPT_LIKE → INFO/NOTICE when both exec
//!      bit (or inapplicable) and shebang are present, else ERROR
//!
//! Every flag combination lands in exactly one row.

use serde::Serialize;

use crate::rules::catalog::{Level, Verdict};
use crate::rules::shebangs::KnownShebangs;
use crate::signals::model::{ScriptLibFlags as F, Signals};

/// How the entry-point guard is quoted in messages.
pub const NAME_MAIN_GUARD: &str = "`if __name__=='__main__'`";

/// Result of applying the decision table to one file's signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub verdict: Verdict,
    pub level: Level,
    pub message: String,
}

impl Outcome {
    fn new(verdict: Verdict, message: String) -> Self {
        Self {
            verdict,
            level: verdict.level(),
            message,
        }
    }
}

/// Quote text the way Python's `repr` quotes a string: single quotes unless
/// the text holds a single quote and no double quote.
fn quote_line(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Map a file's signals to exactly one verdict and message.
pub fn evaluate(signals: &Signals, known: &KnownShebangs) -> Outcome {
    let exec = signals.has(F::EXEC_BIT);
    let shebang = signals.has(F::SHEBANG);
    let name_main = signals.has(F::NAME_MAIN);
    let script_like = signals.has(F::SCRIPT_LIKE);

    if let Some(line) = signals.shebang.as_deref().filter(|l| !known.is_known(l)) {
        return Outcome::new(
            Verdict::UnrecognizedShebang,
            format!("File has unrecognized shebang {}", quote_line(line)),
        );
    }

    if name_main && script_like {
        return Outcome::new(
            Verdict::NameMainAndScriptLike,
            format!(
                "File has {NAME_MAIN_GUARD} and looks like a script due to {}",
                signals.why_script_like()
            ),
        );
    }

    if !shebang && !name_main && !script_like {
        return if exec {
            Outcome::new(
                Verdict::LibraryWithExecBit,
                "File looks like a library but exec bit is set".to_string(),
            )
        } else {
            Outcome::new(
                Verdict::NormalLibrary,
                "File looks like a normal library".to_string(),
            )
        };
    }

    if !name_main && !script_like {
        return Outcome::new(
            Verdict::ShebangWithoutScript,
            format!(
                "File has shebang{} but seems to be missing anything script-like",
                if exec { " and exec bit" } else { "" }
            ),
        );
    }

    // Exactly one of NAME_MAIN and SCRIPT_LIKE from here on.
    let exec_ok = exec || !signals.exec_bit.is_applicable();
    if exec_ok && shebang {
        return if script_like {
            Outcome::new(
                Verdict::ScriptCouldUseNameMain,
                format!("File looks like a normal script (but could use {NAME_MAIN_GUARD})"),
            )
        } else {
            Outcome::new(
                Verdict::NormalScript,
                "File looks like a normal script".to_string(),
            )
        };
    }

    let missing: Vec<&str> = [(!exec_ok, "exec bit"), (!shebang, "shebang")]
        .into_iter()
        .filter_map(|(is_missing, what)| is_missing.then_some(what))
        .collect();
    let why = if script_like {
        signals.why_script_like()
    } else {
        NAME_MAIN_GUARD.to_string()
    };

    Outcome::new(
        Verdict::ScriptMissingMarks,
        format!(
            "File looks like a script (due to {why}) but is missing {}",
            missing.join(" and ")
        ),
    )
}
