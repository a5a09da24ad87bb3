use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A terminal spinner for long-running requests.
///
/// Used by the upload flow, which has its own pending indicator
/// independent of the chat typing dots. Clears itself when dropped, so
/// an early return can never leave a stale frame on screen.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["   ", ".  ", ".. ", "...", " ..", "  .", "   "])
                .template("{msg}{spinner}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
