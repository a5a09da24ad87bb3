use anyhow::Result;
use clap::Parser;

use chatbox_cli::cli::commands::{chat, login, logout, upload};
use chatbox_cli::cli::{Args, Command};
use chatbox_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Login) => {
            let options = login::LoginOptions {
                endpoint: args.endpoint,
            };
            login::run_login(options).await?;
        }
        Some(Command::Logout) => {
            logout::run_logout()?;
        }
        Some(Command::Upload { file }) => {
            let options = upload::UploadOptions {
                endpoint: args.endpoint,
                file,
            };
            upload::run_upload(options).await?;
        }
        Some(Command::Chat) | None => {
            let options = chat::ChatOptions {
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
