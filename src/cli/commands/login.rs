use anyhow::{Result, bail};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use super::resolve_backend;
use crate::api::{ApiClient, LoginOutcome};
use crate::auth::SessionStore;
use crate::status;
use crate::ui::{Style, is_prompt_cancelled};

pub struct LoginOptions {
    pub endpoint: Option<String>,
}

/// Prompts for credentials, authenticates, and stores the session.
///
/// A cancelled prompt (Ctrl+C or Escape) exits quietly without an error.
pub async fn run_login(options: LoginOptions) -> Result<()> {
    let config = resolve_backend(options.endpoint)?;

    let Some(username) = prompt_or_cancel(Text::new("Username:").prompt())? else {
        return Ok(());
    };
    let Some(password) = prompt_or_cancel(
        Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt(),
    )?
    else {
        return Ok(());
    };

    let client = ApiClient::new(config.backend_url);

    match client.login(username.trim(), &password).await? {
        LoginOutcome::Authenticated(identity) => {
            let store = SessionStore::new();
            store.save(&identity)?;
            status!(
                "{} Logged in as {} ({})",
                Style::success("✓"),
                Style::value(&identity.username),
                Style::secondary(&identity.role)
            );
            Ok(())
        }
        LoginOutcome::Denied => {
            bail!("Invalid username or password")
        }
    }
}

/// Maps a cancelled prompt to `None` so the caller can bail out quietly.
fn prompt_or_cancel(result: Result<String, InquireError>) -> Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
