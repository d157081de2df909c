use crate::exec::ExecBit;
use crate::python::parse::{StmtKind, TopLevelStmt};
use crate::signals::model::{ScriptLibFlags, Signals};

/// Derive the classifier's signals from parsed facts about one file.
///
/// A pure mapping: no policy is applied here, and whether a shebang is
/// recognised is left to the rules.
pub fn extract_signals(
    outline: &[TopLevelStmt],
    shebang: Option<&str>,
    exec_bit: ExecBit,
) -> Signals {
    let mut flags = ScriptLibFlags::EMPTY;
    flags.set(ScriptLibFlags::EXEC_BIT, exec_bit.is_set());
    flags.set(ScriptLibFlags::SHEBANG, shebang.is_some());

    let mut evidence = Vec::new();
    for stmt in outline {
        match stmt.kind {
            StmtKind::EntryPointGuardIf => flags.insert(ScriptLibFlags::NAME_MAIN),
            kind if kind.is_declaration() => {}
            _ => evidence.push(stmt.clone()),
        }
    }
    flags.set(ScriptLibFlags::SCRIPT_LIKE, !evidence.is_empty());

    tracing::trace!(%flags, evidence = evidence.len(), "signals extracted");

    Signals {
        flags,
        exec_bit,
        shebang: shebang.map(str::to_string),
        evidence,
    }
}
