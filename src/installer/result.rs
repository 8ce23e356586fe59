//! Installation result accumulated over one run

use std::path::PathBuf;

/// One line of the end-of-run summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledItem {
    /// Component type or file name
    pub label: String,
    /// Directory the item was written into
    pub destination: PathBuf,
}

/// Files written by a run and the items to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationResult {
    pub theme: String,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    pub items: Vec<InstalledItem>,
}

impl InstallationResult {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            files: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Count a successfully written file
    pub fn add_file(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Record a summary line
    pub fn add_item(&mut self, label: impl Into<String>, destination: PathBuf) {
        self.items.push(InstalledItem {
            label: label.into(),
            destination,
        });
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
