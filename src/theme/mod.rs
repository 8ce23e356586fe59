//! Theme catalog and remote file naming
//!
//! A theme is a named directory in the remote themes repository. The tool only
//! accepts themes from a fixed allow-list, whatever the remote actually holds.

pub mod files;

pub use files::{RemoteFile, component_files, root_files};

use std::fmt;

use crate::config::InstallerConfig;
use crate::error::{self, Result};

/// A theme name that passed allow-list validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of theme names the tool recognizes
#[derive(Debug, Clone, Copy)]
pub struct ThemeCatalog<'a> {
    themes: &'a [String],
}

impl<'a> ThemeCatalog<'a> {
    pub fn new(config: &'a InstallerConfig) -> Self {
        Self {
            themes: &config.themes,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.themes.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|theme| theme == name)
    }

    /// Reject names outside the allow-list
    pub fn validate(&self, name: &str) -> Result<ThemeName> {
        if self.contains(name) {
            return Ok(ThemeName(name.to_string()));
        }
        let available: Vec<&str> = self.names().collect();
        Err(error::theme::unknown(name, &available))
    }
}
