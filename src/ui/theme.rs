//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! fall back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.bold())
        }
    }

    /// Style for labels/keys (e.g., "username", "role")
    pub fn label<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.dimmed())
        }
    }

    /// Style for primary values (e.g., usernames, file names)
    pub fn value<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.cyan())
        }
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.dimmed())
        }
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.green())
        }
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.red().bold())
        }
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.yellow())
        }
    }

    /// Style for commands (e.g., "/help", "/logout")
    pub fn command<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.green())
        }
    }

    /// Style for questions in the transcript
    pub fn question<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.cyan().bold())
        }
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        if output::is_no_color() {
            format!("{text}")
        } else {
            format!("{}", text.dimmed())
        }
    }
}
