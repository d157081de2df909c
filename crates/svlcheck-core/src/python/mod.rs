//! Python source handling: reading, shebang detection and top-level parsing.

pub mod parse;
pub mod read;
pub mod shebang;

/// File extension of candidate sources, compared case-insensitively.
pub const PYTHON_EXTENSION: &str = "py";
