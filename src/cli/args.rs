use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatbox")]
#[command(about = "Terminal chat client for a document Q&A backend")]
#[command(version)]
pub struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login,
    /// Clear the stored session
    Logout,
    /// Interactive chat with the backend (the default)
    Chat,
    /// Upload a document to the knowledge base (admin only)
    Upload {
        /// Path to a .pdf or .docx document
        file: PathBuf,
    },
}
