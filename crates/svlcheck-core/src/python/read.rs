use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::CheckError;

/// A candidate source file loaded for analysis.
///
/// Metadata is taken from the open handle so the exec-bit observation
/// and the text refer to the same file.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub metadata: fs::Metadata,
}

/// Read a Python source file as UTF-8 text.
///
/// Fails with an input error if the path is missing, unreadable, not a
/// regular file, or not valid UTF-8.
pub fn read_source(path: &Path) -> Result<SourceFile, CheckError> {
    let io_err = |source: std::io::Error| CheckError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Opening a FIFO for reading blocks, so reject special files first.
    if !fs::metadata(path).map_err(io_err)?.is_file() {
        return Err(CheckError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(io_err)?;
    let metadata = file.metadata().map_err(io_err)?;
    if !metadata.is_file() {
        return Err(CheckError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut bytes).map_err(io_err)?;

    let text = String::from_utf8(bytes).map_err(|_| CheckError::NotText {
        path: path.to_path_buf(),
    })?;

    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile, TempDir};

    fn temp_source(data: &[u8]) -> NamedTempFile {
        let mut file = Builder::new().suffix(".py").tempfile().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_text_and_metadata() {
        let file = temp_source(b"import os\n");

        let src = read_source(file.path()).expect("source read succeeds");

        assert_eq!(src.text, "import os\n");
        assert_eq!(src.path, file.path());
        assert!(src.metadata.is_file());
        assert_eq!(src.metadata.len(), 10);
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = read_source(Path::new("does_not_exist_svlcheck.py")).unwrap_err();
        assert!(matches!(err, CheckError::Io { .. }));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        // Windows refuses to open directories at all.
        assert!(matches!(
            err,
            CheckError::NotAFile { .. } | CheckError::Io { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn fifo_is_rejected_without_blocking() {
        use std::process::Command;
        use std::sync::mpsc;
        use std::time::Duration;

        let dir = TempDir::new().unwrap();
        let fifo = dir.path().join("pipe.py");
        let status = Command::new("mkfifo").arg(&fifo).status().expect("run mkfifo");
        assert!(status.success());

        let (tx, rx) = mpsc::channel();
        let path = fifo.clone();
        std::thread::spawn(move || {
            let _ = tx.send(read_source(&path));
        });

        let result = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("reading a FIFO must not block");
        assert!(matches!(result, Err(CheckError::NotAFile { .. })));
    }

    #[test]
    fn binary_content_is_rejected() {
        let file = temp_source(&[0x66, 0x6f, 0xff, 0xfe]);
        let err = read_source(file.path()).unwrap_err();
        assert!(matches!(err, CheckError::NotText { .. }));
    }
}
