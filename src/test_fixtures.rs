//! Test fixtures shared by unit tests.
//!
//! - [`MemoryRemote`]: a [`RemoteHost`] serving canned files and listings and
//!   recording every request it receives
//! - [`RecordingReporter`]: a [`ProgressReporter`] that keeps what it was told
//!
//! ```ignore
//! let remote = MemoryRemote::new()
//!     .with_file("http://raw/minimal/footer/index.tsx", "export {}");
//! let mut reporter = RecordingReporter::default();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{self, Result};
use crate::remote::{FetchOutcome, RemoteEntry, RemoteHost};
use crate::ui::ProgressReporter;

/// In-memory remote host
///
/// Unknown URLs answer `NotFound` for downloads and fail for listings.
#[derive(Default)]
pub struct MemoryRemote {
    files: HashMap<String, Vec<u8>>,
    failures: HashMap<String, String>,
    listings: HashMap<String, Vec<RemoteEntry>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, url: &str, contents: &str) -> Self {
        self.files.insert(url.to_string(), contents.as_bytes().to_vec());
        self
    }

    /// Make a download fail with a transport-style error
    #[must_use]
    pub fn with_failure(mut self, url: &str, reason: &str) -> Self {
        self.failures.insert(url.to_string(), reason.to_string());
        self
    }

    #[must_use]
    pub fn with_listing(mut self, url: &str, entries: Vec<RemoteEntry>) -> Self {
        self.listings.insert(url.to_string(), entries);
        self
    }

    /// Requests in order, as `GET <url>` or `LIST <url>`
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl RemoteHost for MemoryRemote {
    fn fetch(&self, url: &str) -> FetchOutcome {
        self.requests.borrow_mut().push(format!("GET {url}"));
        if let Some(reason) = self.failures.get(url) {
            return FetchOutcome::Failed(reason.clone());
        }
        match self.files.get(url) {
            Some(contents) => FetchOutcome::Fetched(contents.clone()),
            None => FetchOutcome::NotFound,
        }
    }

    fn list_dir(&self, url: &str) -> Result<Vec<RemoteEntry>> {
        self.requests.borrow_mut().push(format!("LIST {url}"));
        self.listings
            .get(url)
            .cloned()
            .ok_or_else(|| error::http::listing_failed(url, "HTTP 404 Not Found"))
    }
}

/// Reporter that records messages instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<String>,
    pub warnings: Vec<String>,
    pub traces: Vec<String>,
    pub finished: bool,
    pub abandoned: bool,
}

impl ProgressReporter for RecordingReporter {
    fn set_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn trace(&mut self, message: &str) {
        self.traces.push(message.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn abandon(&mut self) {
        self.abandoned = true;
    }
}
