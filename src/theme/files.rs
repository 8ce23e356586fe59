//! Expected file names for fixed-name discovery

use crate::common::string_utils::to_pascal_case;
use crate::config::{COMPONENT_EXTENSION, InstallerConfig};

/// One remote file the installer will try to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// File name written locally
    pub name: String,
    /// Direct download URL
    pub url: String,
}

/// The three files a component type is expected to provide
///
/// `hero-section` yields `index.tsx`, `HeroSection.tsx` and
/// `HeroSection.stories.tsx`.
pub fn component_files(config: &InstallerConfig, theme: &str, component_type: &str) -> Vec<RemoteFile> {
    let component_name = to_pascal_case(component_type);
    let names = [
        format!("index.{COMPONENT_EXTENSION}"),
        format!("{component_name}.{COMPONENT_EXTENSION}"),
        format!("{component_name}.stories.{COMPONENT_EXTENSION}"),
    ];

    names
        .into_iter()
        .map(|name| RemoteFile {
            url: config.raw_url(theme, &format!("{component_type}/{name}")),
            name,
        })
        .collect()
}

/// Files fetched from the theme root by name
pub fn root_files(config: &InstallerConfig, theme: &str, names: &[String]) -> Vec<RemoteFile> {
    names
        .iter()
        .map(|name| RemoteFile {
            name: name.clone(),
            url: config.raw_url(theme, name),
        })
        .collect()
}
