//! How the installer learns which files a component type provides

use std::path::Path;

use clap::ValueEnum;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::remote::{RemoteEntry, RemoteHost};
use crate::theme::{RemoteFile, component_files};

/// File discovery strategy for component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Discovery {
    /// Try `index`, `<Name>` and `<Name>.stories` by constructed URL
    #[default]
    Fixed,
    /// Ask the contents API which files exist
    Listing,
}

/// Files to fetch for one component type
///
/// Fixed discovery never fails. Listing discovery fails when the listing
/// query does; the caller decides whether that is fatal.
pub fn discover(
    discovery: Discovery,
    config: &InstallerConfig,
    remote: &dyn RemoteHost,
    theme: &str,
    component_type: &str,
) -> Result<Vec<RemoteFile>> {
    match discovery {
        Discovery::Fixed => Ok(component_files(config, theme, component_type)),
        Discovery::Listing => {
            let entries = remote.list_dir(&config.listing_url(theme, component_type))?;
            Ok(files_from_listing(&entries))
        }
    }
}

/// Plain files of a listing; directories, links and odd names are skipped
fn files_from_listing(entries: &[RemoteEntry]) -> Vec<RemoteFile> {
    entries
        .iter()
        .filter(|entry| is_plain_file_name(&entry.name))
        .filter_map(|entry| {
            entry.file_download_url().map(|url| RemoteFile {
                name: entry.name.clone(),
                url: url.to_string(),
            })
        })
        .collect()
}

fn is_plain_file_name(name: &str) -> bool {
    Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}
