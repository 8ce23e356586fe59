//! UI/Progress presentation layer
//!
//! This module handles:
//! - The spinner shown while a theme is fetched
//! - Inline warnings and verbose request traces
//! - Console output of summaries, theme lists and errors ([`display`])
//!
//! All progress reporting goes through the [`ProgressReporter`] trait, so the
//! installer does not care whether it runs under a spinner or silently.

pub mod display;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// How chatty the CLI is, from the global `--verbose` / `--quiet` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Normal,
    Verbose,
    Quiet,
}

impl OutputMode {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            OutputMode::Quiet
        } else if verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Progress reporter for an install run
pub trait ProgressReporter {
    /// Replace the current status line
    fn set_message(&mut self, message: &str);

    /// Report a recoverable problem
    fn warn(&mut self, message: &str);

    /// Report a request-level detail (verbose mode only)
    fn trace(&mut self, message: &str);

    /// Remove the status line after a successful run
    fn finish(&mut self);

    /// Remove the status line after a failed run
    fn abandon(&mut self);
}

/// Build the reporter matching the output mode
pub fn reporter_for(mode: OutputMode, initial_message: &str) -> Box<dyn ProgressReporter> {
    match mode {
        OutputMode::Quiet => Box::new(SilentProgressReporter),
        OutputMode::Normal => Box::new(InteractiveProgressReporter::new(initial_message, false)),
        OutputMode::Verbose => Box::new(InteractiveProgressReporter::new(initial_message, true)),
    }
}

const FAILED_MESSAGE: &str = "Theme installation failed";

/// Spinner-based reporter
///
/// Warnings and traces are printed to stderr above the spinner.
pub struct InteractiveProgressReporter {
    spinner: ProgressBar,
    verbose: bool,
}

impl InteractiveProgressReporter {
    pub fn new(initial_message: &str, verbose: bool) -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
            spinner.set_style(style.tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔",
            ]));
        }
        spinner.set_message(initial_message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner, verbose }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn set_message(&mut self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.spinner.suspend(|| {
            eprintln!(
                "  {} {}",
                Style::new().yellow().bold().apply_to("Warning:"),
                Style::new().yellow().apply_to(message)
            );
        });
    }

    fn trace(&mut self, message: &str) {
        if self.verbose {
            self.spinner.suspend(|| {
                eprintln!("  {}", Style::new().dim().apply_to(message));
            });
        }
    }

    fn finish(&mut self) {
        self.spinner.finish_and_clear();
    }

    fn abandon(&mut self) {
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{prefix:.red.bold} {msg:.red}")
        {
            self.spinner.set_style(style);
        }
        self.spinner.set_prefix("✖");
        self.spinner.abandon_with_message(FAILED_MESSAGE);
    }
}

/// Silent progress reporter for `--quiet`
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn set_message(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn trace(&mut self, _message: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
