//! Shared terminal styles
//!
//! Output goes through `anstream`, which strips these codes when stdout is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;
use supports_hyperlinks::Stream;

/// Semantic styles for CLI output
pub trait Stylize {
    /// Links, paths and values the user should notice
    fn accent(&self) -> String;
    /// Secondary detail
    fn muted(&self) -> String;
    /// Headings and key terms
    fn emphasis(&self) -> String;
    /// Something the user has to act on
    fn warn(&self) -> String;
    /// Completed successfully
    fn success(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    "✓".green().to_string()
}

/// `url` as a clickable link where the terminal supports it
pub fn link(url: &str) -> String {
    if supports_hyperlinks::on(Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
