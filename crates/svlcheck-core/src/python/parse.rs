use std::fmt;
use std::path::Path;

use line_numbers::LinePositions;
use rustpython_parser::ast::{self, Ranged};
use rustpython_parser::{Mode, parse};
use serde::Serialize;

use crate::error::CheckError;

/// Closed set of top-level statement kinds the classifier distinguishes.
///
/// Everything that is not a declaration collapses into `Other`, which
/// keeps the Python AST node name for evidence messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StmtKind {
    /// `import x` or `from x import y`.
    Import,
    /// `def` or `async def`.
    FunctionDef,
    ClassDef,
    Assign,
    AnnotatedAssign,
    Assert,
    /// A bare string literal used as a statement.
    DocstringExpr,
    /// `if __name__ == '__main__':`
    EntryPointGuardIf,
    Other(&'static str),
}

impl StmtKind {
    /// Whether the statement only declares things and runs no work at import time.
    pub fn is_declaration(self) -> bool {
        !matches!(self, StmtKind::EntryPointGuardIf | StmtKind::Other(_))
    }
}

/// One statement from the module's outermost scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopLevelStmt {
    pub kind: StmtKind,
    /// Python AST node name, e.g. `Expr`, `For`, `ImportFrom`.
    pub node: &'static str,
    /// 1-based line of the statement's first token.
    pub line: usize,
}

impl fmt::Display for TopLevelStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@L{}", self.node, self.line)
    }
}

/// Parse `source` as a Python module and list its top-level statements.
///
/// Nested bodies are not visited. Strings and comments are handled by the
/// parser, so a `print(...)` inside a string never counts as a statement.
pub fn parse_outline(source: &str, path: &Path) -> Result<Vec<TopLevelStmt>, CheckError> {
    let display = path.display().to_string();
    let module = parse(source, Mode::Module, &display).map_err(|e| CheckError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let body = match module {
        ast::Mod::Module(m) => m.body,
        _ => Vec::new(),
    };

    let line_positions = LinePositions::from(source);

    Ok(body
        .iter()
        .map(|stmt| {
            let line = line_positions
                .from_offset(stmt.range().start().into())
                .as_usize();
            TopLevelStmt {
                kind: classify_stmt(stmt),
                node: node_name(stmt),
                line: line + 1,
            }
        })
        .collect())
}

fn classify_stmt(stmt: &ast::Stmt) -> StmtKind {
    match stmt {
        ast::Stmt::Import(_) | ast::Stmt::ImportFrom(_) => StmtKind::Import,
        ast::Stmt::FunctionDef(_) | ast::Stmt::AsyncFunctionDef(_) => StmtKind::FunctionDef,
        ast::Stmt::ClassDef(_) => StmtKind::ClassDef,
        ast::Stmt::Assign(_) => StmtKind::Assign,
        ast::Stmt::AnnAssign(_) => StmtKind::AnnotatedAssign,
        ast::Stmt::Assert(_) => StmtKind::Assert,
        ast::Stmt::Expr(e) if is_string_constant(&e.value) => StmtKind::DocstringExpr,
        ast::Stmt::If(s) if is_entry_point_guard(s) => StmtKind::EntryPointGuardIf,
        other => StmtKind::Other(node_name(other)),
    }
}

fn is_string_constant(expr: &ast::Expr) -> bool {
    matches!(
        expr,
        ast::Expr::Constant(c) if matches!(c.value, ast::Constant::Str(_))
    )
}

/// Matches exactly `if __name__ == '__main__':`.
///
/// Reversed operands, chained comparisons and compound tests do not count.
fn is_entry_point_guard(stmt: &ast::StmtIf) -> bool {
    let ast::Expr::Compare(cmp) = stmt.test.as_ref() else {
        return false;
    };
    let ast::Expr::Name(name) = cmp.left.as_ref() else {
        return false;
    };
    name.id.as_str() == "__name__"
        && matches!(cmp.ops.as_slice(), [ast::CmpOp::Eq])
        && matches!(
            cmp.comparators.as_slice(),
            [ast::Expr::Constant(c)] if matches!(&c.value, ast::Constant::Str(s) if s == "__main__")
        )
}

fn node_name(stmt: &ast::Stmt) -> &'static str {
    match stmt {
        ast::Stmt::FunctionDef(_) => "FunctionDef",
        ast::Stmt::AsyncFunctionDef(_) => "AsyncFunctionDef",
        ast::Stmt::ClassDef(_) => "ClassDef",
        ast::Stmt::Return(_) => "Return",
        ast::Stmt::Delete(_) => "Delete",
        ast::Stmt::Assign(_) => "Assign",
        ast::Stmt::TypeAlias(_) => "TypeAlias",
        ast::Stmt::AugAssign(_) => "AugAssign",
        ast::Stmt::AnnAssign(_) => "AnnAssign",
        ast::Stmt::For(_) => "For",
        ast::Stmt::AsyncFor(_) => "AsyncFor",
        ast::Stmt::While(_) => "While",
        ast::Stmt::If(_) => "If",
        ast::Stmt::With(_) => "With",
        ast::Stmt::AsyncWith(_) => "AsyncWith",
        ast::Stmt::Match(_) => "Match",
        ast::Stmt::Raise(_) => "Raise",
        ast::Stmt::Try(_) => "Try",
        ast::Stmt::TryStar(_) => "TryStar",
        ast::Stmt::Assert(_) => "Assert",
        ast::Stmt::Import(_) => "Import",
        ast::Stmt::ImportFrom(_) => "ImportFrom",
        ast::Stmt::Global(_) => "Global",
        ast::Stmt::Nonlocal(_) => "Nonlocal",
        ast::Stmt::Expr(_) => "Expr",
        ast::Stmt::Pass(_) => "Pass",
        ast::Stmt::Break(_) => "Break",
        ast::Stmt::Continue(_) => "Continue",
    }
}
