use std::fs::Metadata;
use std::path::Path;

use crate::error::CheckError;
use crate::exec::{ExecBit, ExecBitProbe};

/// Reads the exec bit from live filesystem metadata.
///
/// Platforms without unix permissions report [`ExecBit::Inapplicable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl ExecBitProbe for FilesystemProbe {
    #[cfg(unix)]
    fn observe(&self, _path: &Path, metadata: &Metadata) -> Result<ExecBit, CheckError> {
        use std::os::unix::fs::PermissionsExt;

        Ok(ExecBit::from_mode(metadata.permissions().mode()))
    }

    #[cfg(not(unix))]
    fn observe(&self, _path: &Path, _metadata: &Metadata) -> Result<ExecBit, CheckError> {
        Ok(ExecBit::Inapplicable)
    }
}
