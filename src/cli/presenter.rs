//! CLI presenter for output formatting
//!
//! Status goes to stderr so stdout carries only the sent-message lines.

use colored::*;

use crate::domain::config::NotificationPreference;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print a section heading to stderr
    pub fn heading(&self, title: &str) {
        eprintln!("{} {}", "==".cyan(), title.bold());
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Format one preference for listing
    pub fn format_preference(&self, index: usize, preference: &NotificationPreference) -> String {
        format!(
            "{:>2}. {:<6} {} {}",
            index + 1,
            preference.kind,
            preference.destination,
            format!("\"{}\"", preference.message).dimmed()
        )
    }

    /// Print one preference to stdout (for config list)
    pub fn preference(&self, index: usize, preference: &NotificationPreference) {
        println!("{}", self.format_preference(index, preference));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
