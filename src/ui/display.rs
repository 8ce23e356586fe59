//! Console output for command results

use console::Style;
use miette::Diagnostic;

use crate::common::string_utils::pluralize;
use crate::error::HonuError;
use crate::installer::InstallationResult;

/// Print the themes the tool can install
pub fn print_theme_list<'a>(themes: impl IntoIterator<Item = &'a str>) {
    println!("{}", Style::new().green().apply_to("Available themes:"));
    for theme in themes {
        println!("{}", Style::new().cyan().apply_to(format!("  • {theme}")));
    }
    println!(
        "\n{}",
        Style::new().yellow().apply_to(format!(
            "Use: {} to install a theme",
            Style::new().bold().apply_to("honu-saas-cli add <theme-name>")
        ))
    );
}

/// Print the end-of-run summary: one line per installed item
pub fn print_install_summary(result: &InstallationResult) {
    println!(
        "{} {}",
        Style::new().green().apply_to("✔"),
        Style::new()
            .green()
            .apply_to(format!("Theme '{}' installed successfully!", result.theme))
    );
    println!(
        "{}",
        Style::new().yellow().apply_to(format!(
            "  {} copied:",
            pluralize(result.total_files(), "file", "files")
        ))
    );
    for item in &result.items {
        println!(
            "{}",
            Style::new()
                .cyan()
                .apply_to(format!("    {} → {}", item.label, item.destination.display()))
        );
    }
}

/// Print a fatal error and its help line, if any
pub fn print_error(err: &HonuError) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("Error:"),
        Style::new().red().apply_to(err)
    );
    if let Some(help) = err.help() {
        eprintln!("{}", Style::new().yellow().apply_to(format!("  {help}")));
    }
}
