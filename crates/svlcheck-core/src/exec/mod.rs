//! Executable-bit observation.
//!
//! The classifier never stats files itself. It receives an [`ExecBit`]
//! from an [`ExecBitProbe`], chosen explicitly through [`ExecBitSource`]:
//!
//!   - `Filesystem` → live mode bits (inapplicable off unix)
//!   - `Git`        → mode bits recorded in `HEAD`
//!   - `Ignore`     → always inapplicable

use std::fs::Metadata;
use std::path::Path;

use serde::Serialize;

use crate::error::CheckError;

pub mod filesystem;
pub mod git;

pub use filesystem::FilesystemProbe;
pub use git::GitProbe;

/// Owner execute permission.
pub const S_IXUSR: u32 = 0o100;

/// What a probe learned about a file's executable bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecBit {
    Set,
    Unset,
    /// No meaningful executable bit is available, or the check is switched off.
    Inapplicable,
}

impl ExecBit {
    pub fn from_mode(mode: u32) -> Self {
        if mode & S_IXUSR != 0 {
            ExecBit::Set
        } else {
            ExecBit::Unset
        }
    }

    pub fn is_set(self) -> bool {
        self == ExecBit::Set
    }

    pub fn is_applicable(self) -> bool {
        self != ExecBit::Inapplicable
    }
}

/// Strategy for observing the executable bit of a file.
pub trait ExecBitProbe {
    /// `metadata` belongs to the already-opened file at `path`.
    fn observe(&self, path: &Path, metadata: &Metadata) -> Result<ExecBit, CheckError>;
}

/// Probe that reports the exec bit as inapplicable.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreProbe;

impl ExecBitProbe for IgnoreProbe {
    fn observe(&self, _path: &Path, _metadata: &Metadata) -> Result<ExecBit, CheckError> {
        Ok(ExecBit::Inapplicable)
    }
}

/// Where the exec bit is sourced from. Selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecBitSource {
    #[default]
    Filesystem,
    Git,
    Ignore,
}

impl ExecBitSource {
    pub fn probe(self) -> Box<dyn ExecBitProbe> {
        match self {
            ExecBitSource::Filesystem => Box::new(FilesystemProbe),
            ExecBitSource::Git => Box::new(GitProbe),
            ExecBitSource::Ignore => Box::new(IgnoreProbe),
        }
    }
}
