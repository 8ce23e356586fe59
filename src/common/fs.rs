//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Create a directory and all of its parents
///
/// Succeeds when the directory already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| error::fs::create_dir_failed(path, e))
}

/// Write `contents` to `path`, replacing anything already there
///
/// The parent directory must exist. The write is not atomic.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| error::fs::write_failed(path, e))
}
