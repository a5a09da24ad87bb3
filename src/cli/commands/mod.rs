pub mod chat;
pub mod login;
pub mod logout;
pub mod upload;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Merges the CLI endpoint override with the config file.
pub(crate) fn resolve_backend(endpoint: Option<String>) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();
    resolve_config(&ResolveOptions { endpoint }, &file_config)
}
