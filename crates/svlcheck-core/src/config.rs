use crate::exec::ExecBitSource;
use crate::rules::shebangs::KnownShebangs;

/// Per-run settings for the classifier.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Shebang lines accepted as valid.
    pub known_shebangs: KnownShebangs,
    /// Where the exec bit comes from. Never autodetected.
    pub exec_bit: ExecBitSource,
}
