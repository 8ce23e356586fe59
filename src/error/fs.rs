//! File system errors

use std::path::Path;

use super::HonuError;

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> HonuError {
    HonuError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl ToString) -> HonuError {
    HonuError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> HonuError {
    HonuError::IoError {
        message: message.into(),
    }
}
