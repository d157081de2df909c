use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Serialize, Serializer};

use crate::exec::ExecBit;
use crate::python::parse::TopLevelStmt;

/// The four independent observations behind a classification.
///
/// Stored as a bitmask; every one of the 16 combinations is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScriptLibFlags(u8);

impl ScriptLibFlags {
    pub const EMPTY: Self = Self(0);
    /// File has its owner execute bit set.
    pub const EXEC_BIT: Self = Self(1);
    /// First line is a `#!` interpreter directive.
    pub const SHEBANG: Self = Self(1 << 1);
    /// Contains `if __name__ == '__main__':` at the top level.
    pub const NAME_MAIN: Self = Self(1 << 2);
    /// Contains top-level statements that do work at import time.
    pub const SCRIPT_LIKE: Self = Self(1 << 3);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::EXEC_BIT, "EXEC_BIT"),
        (Self::SHEBANG, "SHEBANG"),
        (Self::NAME_MAIN, "NAME_MAIN"),
        (Self::SCRIPT_LIKE, "SCRIPT_LIKE"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits, dropping any bit outside the four flags.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// All 16 flag combinations in ascending bit order.
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        (0u8..16).map(Self)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for ScriptLibFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ScriptLibFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for ScriptLibFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        f.write_str(&self.names().join("|"))
    }
}

impl Serialize for ScriptLibFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

/// Everything the decision table needs to know about one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub flags: ScriptLibFlags,
    pub exec_bit: ExecBit,
    /// Literal first line when `SHEBANG` is set.
    pub shebang: Option<String>,
    /// Top-level statements that made the file look like a script, in source order.
    pub evidence: Vec<TopLevelStmt>,
}

impl Signals {
    pub fn has(&self, flag: ScriptLibFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Evidence rendered as `Kind@L<line>` descriptors joined by `", "`.
    pub fn why_script_like(&self) -> String {
        self.evidence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
