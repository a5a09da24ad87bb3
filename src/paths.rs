//! XDG-style path utilities for configuration and session state.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use std::path::PathBuf;

/// Returns the configuration directory for chatbox.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/chatbox` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/chatbox` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("chatbox"),
        |xdg| PathBuf::from(xdg).join("chatbox"),
    )
}

/// Returns the state directory for chatbox (holds the login session file).
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/chatbox` if `XDG_STATE_HOME` is set
/// 2. `~/.local/state/chatbox` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME").map_or_else(
        |_| home_dir().join(".local").join("state").join("chatbox"),
        |xdg| PathBuf::from(xdg).join("chatbox"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir();
        assert!(dir.ends_with(".config/chatbox"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/chatbox"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_state_dir_default() {
        let original = std::env::var("XDG_STATE_HOME").ok();
        unsafe { std::env::remove_var("XDG_STATE_HOME") };

        let dir = state_dir();
        assert!(dir.ends_with(".local/state/chatbox"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_STATE_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_state_dir_xdg_override() {
        let original = std::env::var("XDG_STATE_HOME").ok();
        unsafe { std::env::set_var("XDG_STATE_HOME", "/custom/state") };

        let dir = state_dir();
        assert_eq!(dir, PathBuf::from("/custom/state/chatbox"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_STATE_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_STATE_HOME") };
        }
    }
}
