//! Installer configuration
//!
//! Everything the installer needs to know about the remote theme repository
//! and the local project layout is fixed at start-up in an [`InstallerConfig`].
//! The defaults point at the public `honu-saas-themes` repository; base URLs
//! and the GitHub token can be overridden from the command line or environment.

use std::path::{Path, PathBuf};

/// Raw file download root of the themes repository
pub const DEFAULT_RAW_BASE_URL: &str =
    "https://raw.githubusercontent.com/honu-ai/honu-saas-themes/main/components";

/// GitHub contents API root of the themes repository
pub const DEFAULT_API_BASE_URL: &str =
    "https://api.github.com/repos/honu-ai/honu-saas-themes/contents/components";

/// Themes the tool recognizes, in display order
pub const AVAILABLE_THEMES: &[&str] = &["minimal", "corporate", "playful", "friendly", "technical"];

/// Component types copied for every theme, in install order
pub const COMPONENT_TYPES: &[&str] = &[
    "hero-section",
    "problem-section",
    "solution-section",
    "benefits-section",
    "faq-section",
    "cta-section",
    "footer",
];

/// Files copied from the theme root into `app/`
pub const APP_FILES: &[&str] = &["globals.css", "layout.tsx"];

/// Files copied from the theme root into `app/(dashboard)/`
pub const PAGE_FILES: &[&str] = &["page.tsx"];

/// Extension of component source files
pub const COMPONENT_EXTENSION: &str = "tsx";

pub const COMPONENTS_DIR: &str = "components";
pub const APP_DIR: &str = "app";
pub const DASHBOARD_DIR: &str = "(dashboard)";

/// Immutable configuration shared by every step of an install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub raw_base_url: String,
    pub api_base_url: String,
    pub github_token: Option<String>,
    pub themes: Vec<String>,
    pub component_types: Vec<String>,
    pub app_files: Vec<String>,
    pub page_files: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            github_token: None,
            themes: to_owned_list(AVAILABLE_THEMES),
            component_types: to_owned_list(COMPONENT_TYPES),
            app_files: to_owned_list(APP_FILES),
            page_files: to_owned_list(PAGE_FILES),
        }
    }
}

impl InstallerConfig {
    /// Override the raw download root
    #[must_use]
    pub fn with_raw_base_url(mut self, url: impl Into<String>) -> Self {
        self.raw_base_url = trim_base_url(url.into());
        self
    }

    /// Override the contents API root
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = trim_base_url(url.into());
        self
    }

    /// Authenticate remote requests with a GitHub token
    #[must_use]
    pub fn with_github_token(mut self, token: Option<String>) -> Self {
        self.github_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_component_types(mut self, types: &[&str]) -> Self {
        self.component_types = to_owned_list(types);
        self
    }

    /// URL of a file below the theme root, e.g. `minimal/footer/index.tsx`
    pub fn raw_url(&self, theme: &str, path: &str) -> String {
        format!("{}/{}/{}", self.raw_base_url, theme, path)
    }

    /// Contents API URL listing one component type of a theme
    pub fn listing_url(&self, theme: &str, component_type: &str) -> String {
        format!("{}/{}/{}", self.api_base_url, theme, component_type)
    }

    /// `components/<component_type>` below the project root
    pub fn component_dir(&self, root: &Path, component_type: &str) -> PathBuf {
        root.join(COMPONENTS_DIR).join(component_type)
    }

    /// `app/` below the project root
    pub fn app_dir(&self, root: &Path) -> PathBuf {
        root.join(APP_DIR)
    }

    /// `app/(dashboard)/` below the project root
    pub fn dashboard_dir(&self, root: &Path) -> PathBuf {
        root.join(APP_DIR).join(DASHBOARD_DIR)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
