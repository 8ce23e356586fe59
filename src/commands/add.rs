//! Add command implementation
//!
//! This command installs a theme into the project directory:
//! 1. Validate the theme name against the allow-list
//! 2. Resolve the project directory
//! 3. Fetch every component, app and page file and write it locally
//! 4. Print the installation summary

use std::path::{Path, PathBuf};

use crate::cli::AddArgs;
use crate::config::InstallerConfig;
use crate::error::{self, Result};
use crate::installer::{Discovery, InstallationResult, Installer};
use crate::remote::{HttpRemote, RemoteHost};
use crate::theme::{ThemeCatalog, ThemeName};
use crate::ui::{self, OutputMode, ProgressReporter, display};

/// Run add command
pub fn run(workspace: Option<PathBuf>, output: OutputMode, args: AddArgs) -> Result<()> {
    let config = InstallerConfig::default()
        .with_raw_base_url(args.raw_base_url)
        .with_api_base_url(args.api_base_url)
        .with_github_token(args.github_token);

    // Unknown themes fail before the client or the spinner exist
    let theme = ThemeCatalog::new(&config).validate(&args.theme)?;

    let root = get_workspace_path(workspace)?;
    let remote = HttpRemote::new(&config)?;
    let mut reporter = ui::reporter_for(output, &format!("Fetching theme '{theme}'..."));

    let result = add_theme(
        &config,
        &remote,
        reporter.as_mut(),
        &theme,
        &root,
        args.discovery,
    )?;

    display::print_install_summary(&result);
    Ok(())
}

/// Install and settle the reporter
fn add_theme(
    config: &InstallerConfig,
    remote: &dyn RemoteHost,
    reporter: &mut dyn ProgressReporter,
    theme: &ThemeName,
    root: &Path,
    discovery: Discovery,
) -> Result<InstallationResult> {
    let result = Installer::new(config, remote, &mut *reporter, discovery).install(theme, root);

    match result {
        Ok(result) => {
            reporter.finish();
            Ok(result)
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}

/// Get workspace path from CLI argument or current directory
fn get_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| {
            error::fs::io_error(format!("Failed to get current directory: {e}"))
        }),
    }
}
