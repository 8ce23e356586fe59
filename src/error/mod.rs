//! Error types and handling for honu-saas-cli
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`theme`]: Theme validation errors
//! - [`install`]: Whole-run install errors
//! - [`fs`]: File system errors
//! - [`http`]: Remote host errors

pub mod fs;
pub mod http;
pub mod install;
pub mod theme;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for honu-saas-cli operations
#[derive(Error, Diagnostic, Debug)]
pub enum HonuError {
    // Theme errors
    #[error("Theme '{name}' not found.")]
    #[diagnostic(
        code(honu::theme::unknown),
        help("Available themes: {available}")
    )]
    UnknownTheme { name: String, available: String },

    // Install errors
    #[error("No components found for theme '{theme}'")]
    #[diagnostic(
        code(honu::install::no_files),
        help("Check that the theme exists in the remote repository and that you are online")
    )]
    NoFilesInstalled { theme: String },

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(honu::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(honu::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(honu::fs::io_error))]
    IoError { message: String },

    // Remote errors
    #[error("Failed to initialize HTTP client: {reason}")]
    #[diagnostic(code(honu::http::client_failed))]
    HttpClientFailed { reason: String },

    #[error("Failed to list {url}: {reason}")]
    #[diagnostic(code(honu::http::listing_failed))]
    ListingFailed { url: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(honu::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<reqwest::Error> for HonuError {
    fn from(err: reqwest::Error) -> Self {
        HonuError::HttpClientFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HonuError>;
