//! Theme installation
//!
//! One install is a single sequential pass:
//! 1. For each component type, discover its files and write them to
//!    `components/<component-type>/`
//! 2. Write the app files from the theme root to `app/`
//! 3. Write the page files from the theme root to `app/(dashboard)/`
//!
//! Missing files are skipped, failed downloads and failed listings are
//! reported and skipped. Only a directory that cannot be created aborts the
//! run. A run that writes nothing at all is an error.

pub mod discovery;
pub mod result;

pub use discovery::Discovery;
pub use result::InstallationResult;

use std::path::Path;

use crate::common::fs;
use crate::config::InstallerConfig;
use crate::error::{self, Result};
use crate::remote::{FetchOutcome, RemoteHost};
use crate::theme::{RemoteFile, ThemeName, root_files};
use crate::ui::ProgressReporter;

/// Installs one theme into a project directory
pub struct Installer<'a> {
    config: &'a InstallerConfig,
    remote: &'a dyn RemoteHost,
    reporter: &'a mut dyn ProgressReporter,
    discovery: Discovery,
}

impl<'a> Installer<'a> {
    pub fn new(
        config: &'a InstallerConfig,
        remote: &'a dyn RemoteHost,
        reporter: &'a mut dyn ProgressReporter,
        discovery: Discovery,
    ) -> Self {
        Self {
            config,
            remote,
            reporter,
            discovery,
        }
    }

    /// Install every component, app and page file of `theme` below `root`
    pub fn install(&mut self, theme: &ThemeName, root: &Path) -> Result<InstallationResult> {
        let config = self.config;
        let mut result = InstallationResult::new(theme.as_str());

        for component_type in &config.component_types {
            self.install_component(theme.as_str(), component_type, root, &mut result)?;
        }

        self.reporter.set_message("Fetching theme app files...");
        self.install_root_files(
            theme.as_str(),
            &config.app_files,
            &config.app_dir(root),
            &mut result,
        )?;

        self.reporter.set_message("Fetching theme page file...");
        self.install_root_files(
            theme.as_str(),
            &config.page_files,
            &config.dashboard_dir(root),
            &mut result,
        )?;

        if result.is_empty() {
            return Err(error::install::no_files(theme.as_str()));
        }
        Ok(result)
    }

    fn install_component(
        &mut self,
        theme: &str,
        component_type: &str,
        root: &Path,
        result: &mut InstallationResult,
    ) -> Result<()> {
        self.reporter
            .set_message(&format!("Fetching {component_type} components..."));

        let discovered = discovery::discover(
            self.discovery,
            self.config,
            self.remote,
            theme,
            component_type,
        );
        let files = match discovered {
            Ok(files) => files,
            Err(e) => {
                self.reporter.trace(&e.to_string());
                self.reporter.warn(&format!(
                    "Component type '{component_type}' not found for theme '{theme}'"
                ));
                return Ok(());
            }
        };

        self.reporter
            .set_message(&format!("Installing {component_type} components..."));

        let dest = self.config.component_dir(root, component_type);
        fs::ensure_dir(&dest)?;

        let mut found = 0;
        for file in &files {
            if self.download(file, &dest, result) {
                found += 1;
            }
        }

        if found > 0 {
            result.add_item(component_type, dest);
        } else {
            self.reporter.warn(&format!(
                "No files found for component '{component_type}' in theme '{theme}'"
            ));
        }
        Ok(())
    }

    fn install_root_files(
        &mut self,
        theme: &str,
        names: &[String],
        dest: &Path,
        result: &mut InstallationResult,
    ) -> Result<()> {
        fs::ensure_dir(dest)?;

        for file in root_files(self.config, theme, names) {
            self.reporter.set_message(&format!("Installing {}...", file.name));
            if self.download(&file, dest, result) {
                result.add_item(file.name.as_str(), dest.to_path_buf());
            }
        }
        Ok(())
    }

    /// Fetch one file into `dest`; true only if it was written
    fn download(&mut self, file: &RemoteFile, dest: &Path, result: &mut InstallationResult) -> bool {
        self.reporter.trace(&format!("GET {}", file.url));

        let contents = match self.remote.fetch(&file.url) {
            FetchOutcome::Fetched(contents) => contents,
            FetchOutcome::NotFound => {
                self.reporter.trace(&format!("  not found: {}", file.name));
                return false;
            }
            FetchOutcome::Failed(reason) => {
                self.reporter
                    .warn(&format!("Could not fetch {}: {}", file.name, reason));
                return false;
            }
        };

        let path = dest.join(&file.name);
        match fs::write_file(&path, &contents) {
            Ok(()) => {
                self.reporter.trace(&format!("  wrote {}", path.display()));
                result.add_file(path);
                true
            }
            Err(e) => {
                self.reporter.warn(&e.to_string());
                false
            }
        }
    }
}
