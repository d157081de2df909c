use std::fs::Metadata;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::CheckError;
use crate::exec::{ExecBit, ExecBitProbe};

/// Reads the exec bit from the mode git records for the file in `HEAD`.
///
/// Runs `git ls-tree HEAD <name>` in the file's directory. Any failure is
/// returned; there is no fallback to the live filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitProbe;

impl ExecBitProbe for GitProbe {
    fn observe(&self, path: &Path, _metadata: &Metadata) -> Result<ExecBit, CheckError> {
        let query_err = |message: String| CheckError::GitQuery {
            path: path.to_path_buf(),
            message,
        };

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| query_err("file name is not valid UTF-8".into()))?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        tracing::debug!(path = %path.display(), "querying git for mode bits");

        let output = Command::new("git")
            .args(["ls-tree", "HEAD"])
            .arg(name)
            .current_dir(dir)
            .output()
            .map_err(|e| query_err(format!("failed to run git: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            return Err(query_err(format!(
                "git ls-tree exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_ls_tree(&String::from_utf8_lossy(&output.stdout), name)
    }
}

fn ls_tree_re() -> &'static Regex {
    static LS_TREE_RE: OnceLock<Regex> = OnceLock::new();
    LS_TREE_RE.get_or_init(|| {
        Regex::new(r"^([0-7]+) blob [0-9a-fA-F]{40}(?:[0-9a-fA-F]{24})?\t(.+)\n?$")
            .expect("valid regex")
    })
}

/// Parse a single-entry `git ls-tree` listing: `<mode> blob <id>\t<name>`.
///
/// The listed name must equal `expected_name`.
pub fn parse_ls_tree(output: &str, expected_name: &str) -> Result<ExecBit, CheckError> {
    let caps = ls_tree_re()
        .captures(output)
        .ok_or_else(|| CheckError::GitOutput {
            output: output.to_string(),
        })?;

    if &caps[2] != expected_name {
        return Err(CheckError::GitFilenameMismatch {
            output: output.to_string(),
        });
    }

    let mode = u32::from_str_radix(&caps[1], 8).map_err(|_| CheckError::GitOutput {
        output: output.to_string(),
    })?;

    Ok(ExecBit::from_mode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = "3b18e512dba79e4c8300dd08aeb37f8e728b8dad";

    #[test]
    fn executable_blob_is_set() {
        let out = format!("100755 blob {BLOB}\tscript.py\n");
        assert_eq!(parse_ls_tree(&out, "script.py").unwrap(), ExecBit::Set);
    }

    #[test]
    fn regular_blob_is_unset() {
        let out = format!("100644 blob {BLOB}\tlib.py");
        assert_eq!(parse_ls_tree(&out, "lib.py").unwrap(), ExecBit::Unset);
    }

    #[test]
    fn sha256_object_ids_are_accepted() {
        let out = format!("100755 blob {BLOB}{}\trun.py\n", "0".repeat(24));
        assert_eq!(parse_ls_tree(&out, "run.py").unwrap(), ExecBit::Set);
    }

    #[test]
    fn filename_mismatch_is_structural_error() {
        let out = format!("100755 blob {BLOB}\tother.py\n");
        let err = parse_ls_tree(&out, "script.py").unwrap_err();
        assert!(matches!(err, CheckError::GitFilenameMismatch { .. }));
    }

    #[test]
    fn untracked_file_output_is_rejected() {
        let err = parse_ls_tree("", "new.py").unwrap_err();
        assert!(matches!(err, CheckError::GitOutput { .. }));
    }

    #[test]
    fn multiple_entries_are_rejected() {
        let out = format!("100644 blob {BLOB}\ta.py\n100644 blob {BLOB}\ta.py\n");
        let err = parse_ls_tree(&out, "a.py").unwrap_err();
        assert!(matches!(err, CheckError::GitOutput { .. }));
    }

    #[test]
    fn non_blob_entries_are_rejected() {
        let out = format!("040000 tree {BLOB}\tpkg\n");
        assert!(matches!(
            parse_ls_tree(&out, "pkg").unwrap_err(),
            CheckError::GitOutput { .. }
        ));
    }
}
