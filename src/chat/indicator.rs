use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

use super::transcript::Transcript;

/// Interval between animation frames.
pub(super) const TICK: Duration = Duration::from_millis(500);

/// Highest dot count before the animation wraps back to one dot.
const MAX_DOTS: usize = 4;

/// Cosmetic "typing" animation for the pending exchange.
///
/// While active, a background task overwrites the last exchange's answer
/// every 500ms with a run of one to four dots, wrapping back to one. The
/// task is aborted on [`stop`](Self::stop) and again on drop, so the
/// timer can never outlive the exchange it decorates (RAII, same shape
/// as the upload spinner).
pub struct TypingIndicator {
    handle: JoinHandle<()>,
}

impl TypingIndicator {
    /// Starts the animation against the given transcript.
    ///
    /// The first frame appears one tick after the start; each frame
    /// rewrites only the last entry.
    pub fn start(transcript: Arc<Mutex<Transcript>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut n: usize = 1;
            loop {
                time::sleep(TICK).await;
                if let Some(last) = lock(&transcript).last_mut() {
                    last.answer = ".".repeat(n);
                }
                n += 1;
                if n > MAX_DOTS {
                    n = 1;
                }
            }
        });

        Self { handle }
    }

    /// Cancels the animation. The dots stay in place until the real
    /// answer overwrites them.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
