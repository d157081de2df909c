use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while checking a single file.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("{} is not valid UTF-8 text", .path.display())]
    NotText { path: PathBuf },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("git metadata query failed for {}: {message}", .path.display())]
    GitQuery { path: PathBuf, message: String },

    #[error("failed to parse git output {output:?}")]
    GitOutput { output: String },

    #[error("unexpected git output, filename mismatch {output:?}")]
    GitFilenameMismatch { output: String },
}

/// Coarse classification of a [`CheckError`], used by batch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, unreadable or non-text input. Reported per file.
    Input,
    /// Source is not valid Python. Reported per file.
    Parse,
    /// External metadata query failed. Fatal for the run.
    Metadata,
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Io { .. } | CheckError::NotAFile { .. } | CheckError::NotText { .. } => {
                ErrorKind::Input
            }
            CheckError::Parse { .. } => ErrorKind::Parse,
            CheckError::GitQuery { .. }
            | CheckError::GitOutput { .. }
            | CheckError::GitFilenameMismatch { .. } => ErrorKind::Metadata,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let input = CheckError::NotAFile {
            path: PathBuf::from("dir"),
        };
        let parse = CheckError::Parse {
            path: PathBuf::from("a.py"),
            message: "bad".into(),
        };
        let meta = CheckError::GitFilenameMismatch {
            output: "x".into(),
        };

        assert_eq!(input.kind(), ErrorKind::Input);
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert_eq!(meta.kind(), ErrorKind::Metadata);
        assert!(!input.is_fatal());
        assert!(!parse.is_fatal());
        assert!(meta.is_fatal());
    }

    #[test]
    fn messages_name_the_file() {
        let err = CheckError::Parse {
            path: PathBuf::from("pkg/mod.py"),
            message: "unexpected token".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse pkg/mod.py: unexpected token"
        );
    }
}
