//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;

pub use add::AddArgs;
pub use completions::CompletionsArgs;

/// honu-saas-cli - Honu SaaS theme scaffolding
///
/// Copy a theme's components, styles and pages into your project.
#[derive(Parser, Debug)]
#[command(
    name = "honu-saas-cli",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold Honu SaaS themes into your project",
    long_about = "honu-saas-cli copies a theme's UI components, global styles, layout and \
                  dashboard page from the honu-saas-themes repository into the current project.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  honu-saas-cli list                          \x1b[90m# List available themes\x1b[0m\n   \
                  honu-saas-cli add minimal                   \x1b[90m# Install the minimal theme\x1b[0m\n   \
                  honu-saas-cli add playful --discovery listing \x1b[90m# Install whatever the repository lists\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "HONU_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print the summary and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new theme by copying its components into your project
    Add(AddArgs),

    /// List all available themes
    List,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
