//! Remote theme repository access
//!
//! The installer talks to the themes repository only through [`RemoteHost`]:
//! a plain file download and a GitHub-style "list directory contents" query.
//! [`HttpRemote`] is the real implementation; tests substitute an in-memory one.

pub mod http;

pub use http::HttpRemote;

use serde::Deserialize;

use crate::error::Result;

/// Result of one file download attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file exists; its raw bytes
    Fetched(Vec<u8>),
    /// The host answered 404
    NotFound,
    /// Transport error or an unexpected status
    Failed(String),
}

/// Kind of a directory listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a remote directory listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RemoteEntry {
    /// Download location, for plain files only
    pub fn file_download_url(&self) -> Option<&str> {
        match self.kind {
            EntryKind::File => self.download_url.as_deref(),
            _ => None,
        }
    }
}

/// File-listing-and-download provider
pub trait RemoteHost {
    /// Download one file
    fn fetch(&self, url: &str) -> FetchOutcome;

    /// List the entries of a remote directory
    fn list_dir(&self, url: &str) -> Result<Vec<RemoteEntry>>;
}
