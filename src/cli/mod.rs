//! Command-line interface definitions and handlers.

mod args;

/// Subcommand handlers.
pub mod commands;

pub use args::{Args, Command};
