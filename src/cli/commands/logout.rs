use anyhow::Result;

use crate::auth::SessionStore;
use crate::status;

/// Clears the stored session. Succeeds even when no session exists.
pub fn run_logout() -> Result<()> {
    let store = SessionStore::new();
    let had_session = store.load().unwrap_or(None).is_some();
    store.clear()?;

    if had_session {
        status!("Logged out.");
    } else {
        status!("No active session.");
    }

    Ok(())
}
