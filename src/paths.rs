use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Normalize any path-like value (`&str`, `String`, `&Path`, `PathBuf`) to an
/// owned `PathBuf`. Shared by the parsing engine and the logging bootstrap;
/// no filesystem access happens here.
pub fn to_path(value: impl Into<PathBuf>) -> PathBuf {
    value.into()
}

/// Create the missing parent directories of a target file path.
pub fn ensure_parent_dirs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
