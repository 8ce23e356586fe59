//! Remote host errors

use super::HonuError;

/// Creates a listing error for a directory query that did not succeed
pub fn listing_failed(url: impl Into<String>, reason: impl ToString) -> HonuError {
    HonuError::ListingFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}
