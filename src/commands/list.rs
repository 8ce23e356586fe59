//! List command implementation
//!
//! Prints the themes `add` accepts. The list is built in; nothing is fetched.

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::theme::ThemeCatalog;
use crate::ui::display;

/// Run list command
pub fn run() -> Result<()> {
    let config = InstallerConfig::default();
    display::print_theme_list(ThemeCatalog::new(&config).names());
    Ok(())
}
