//! Whole-run install errors

use super::HonuError;

/// Creates the error reported when a run wrote nothing
pub fn no_files(theme: impl Into<String>) -> HonuError {
    HonuError::NoFilesInstalled {
        theme: theme.into(),
    }
}
