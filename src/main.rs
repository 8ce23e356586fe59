//! honu-saas-cli - Honu SaaS theme scaffolding
//!
//! Downloads a theme's UI components, global styles, layout and dashboard page
//! from the honu-saas-themes repository and writes them into a project.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod installer;
mod remote;
mod theme;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use ui::{OutputMode, display};

fn main() {
    let cli = Cli::parse();
    let output = OutputMode::from_flags(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.workspace, output, args),
        Commands::List => commands::list::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        display::print_error(&e);
        std::process::exit(1);
    }
}
