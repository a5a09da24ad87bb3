use anyhow::{Result, bail};
use std::sync::Arc;

use super::resolve_backend;
use crate::api::ApiClient;
use crate::auth::SessionStore;
use crate::chat::ChatRepl;

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

/// Runs the interactive chat loop. Requires a stored login session.
pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let store = SessionStore::new();
    let Some(identity) = store.load()? else {
        bail!(
            "Not logged in.\n\n\
             Run 'chatbox login' first."
        );
    };

    let config = resolve_backend(options.endpoint)?;
    let client = Arc::new(ApiClient::new(config.backend_url));

    let mut repl = ChatRepl::new(client, identity, store);
    repl.run().await
}
