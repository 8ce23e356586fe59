//! Theme validation errors

use super::HonuError;

/// Creates an unknown theme error listing the themes that do exist
pub fn unknown(name: impl Into<String>, available: &[&str]) -> HonuError {
    HonuError::UnknownTheme {
        name: name.into(),
        available: available.join(", "),
    }
}
