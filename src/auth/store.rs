use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::identity::SessionIdentity;
use crate::paths;

/// Persists the login session between invocations.
///
/// The session file is the CLI counterpart of the browser's session
/// storage: a small JSON blob holding the username and role returned by
/// the login endpoint. Logout deletes it.
pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at the XDG state directory.
    pub fn new() -> Self {
        Self {
            session_path: paths::state_dir().join("session.json"),
        }
    }

    pub const fn session_path(&self) -> &PathBuf {
        &self.session_path
    }

    /// Loads the stored identity, or `None` if no session exists.
    pub fn load(&self) -> Result<Option<SessionIdentity>> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.session_path).with_context(|| {
            format!(
                "Failed to read session file: {}",
                self.session_path.display()
            )
        })?;

        let identity: SessionIdentity =
            serde_json::from_str(&contents).context("Failed to parse session file")?;

        Ok(Some(identity))
    }

    pub fn save(&self, identity: &SessionIdentity) -> Result<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(identity).context("Failed to serialize session")?;

        fs::write(&self.session_path, contents).with_context(|| {
            format!(
                "Failed to write session file: {}",
                self.session_path.display()
            )
        })?;

        Ok(())
    }

    /// Removes the session file. Succeeds if no session exists.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!(
                    "Failed to remove session file: {}",
                    self.session_path.display()
                )
            }),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
