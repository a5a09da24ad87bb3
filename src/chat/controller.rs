use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

use super::indicator::TypingIndicator;
use super::transcript::{Exchange, Transcript};
use crate::api::AnswerService;
use crate::auth::SessionIdentity;

/// Answer shown when the remote call fails for any reason.
///
/// Timeouts, connection errors, non-2xx statuses, and malformed bodies
/// all collapse into this one string; no retry is attempted.
pub const FALLBACK_ANSWER: &str = "Error fetching answer.";

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Controller state behind one lock: the input field mirror and the
/// pending/locked flags, plus the running indicator while a submission
/// is in flight.
#[derive(Default)]
struct Shared {
    pending_input: String,
    is_pending: bool,
    input_locked: bool,
    indicator: Option<TypingIndicator>,
}

/// Owns the transcript and mediates between input events, the remote
/// answer service, and the typing indicator.
///
/// The identity and the answer service are injected at construction, so
/// the controller can be driven entirely by tests. At most one
/// submission is ever in flight; while it is, further submissions and
/// input edits are silently ignored.
pub struct ChatController {
    service: Arc<dyn AnswerService>,
    identity: SessionIdentity,
    transcript: Arc<Mutex<Transcript>>,
    shared: Arc<Mutex<Shared>>,
}

impl ChatController {
    pub fn new(service: Arc<dyn AnswerService>, identity: SessionIdentity) -> Self {
        Self {
            service,
            identity,
            transcript: Arc::new(Mutex::new(Transcript::new())),
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub const fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// Snapshot of the transcript for rendering.
    pub fn transcript(&self) -> Vec<Exchange> {
        lock(&self.transcript).entries().to_vec()
    }

    pub fn transcript_len(&self) -> usize {
        lock(&self.transcript).len()
    }

    /// Snapshot of the newest exchange, pending or settled.
    pub fn last_exchange(&self) -> Option<Exchange> {
        lock(&self.transcript).last().cloned()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.shared).is_pending
    }

    pub fn input_locked(&self) -> bool {
        lock(&self.shared).input_locked
    }

    pub fn pending_input(&self) -> String {
        lock(&self.shared).pending_input.clone()
    }

    /// Mirrors typing into the input field. Ignored while a submission
    /// is pending (the field is disabled then).
    pub fn set_input(&self, text: &str) {
        let mut shared = lock(&self.shared);
        if shared.is_pending {
            return;
        }
        shared.pending_input = text.to_string();
    }

    /// Focusing the input clears it and locks out logout.
    ///
    /// The lock is only ever released by submit settlement. Focusing
    /// without submitting therefore leaves it set; the web client
    /// behaved the same way and the quirk is kept on purpose.
    pub fn focus_input(&self) {
        let mut shared = lock(&self.shared);
        if shared.is_pending {
            return;
        }
        shared.pending_input.clear();
        shared.input_locked = true;
    }

    /// Enter submits whatever is in the input field.
    pub fn key_press(&self, key: Key) -> Option<JoinHandle<()>> {
        if key != Key::Enter {
            return None;
        }
        let question = self.pending_input();
        self.submit(&question)
    }

    /// Submits a question to the answer service.
    ///
    /// A blank question or a submission while one is already pending is
    /// a silent no-op (`None`). Otherwise the exchange is appended to
    /// the transcript with an empty answer *before* the remote call is
    /// issued, the typing indicator starts, and the returned handle
    /// settles when the answer (or the fallback) has been written.
    ///
    /// Settlement always runs exactly once: it stops the indicator,
    /// writes the final answer into the pending exchange, clears the
    /// input, and releases both flags.
    pub fn submit(&self, question: &str) -> Option<JoinHandle<()>> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        {
            let mut shared = lock(&self.shared);
            if shared.is_pending {
                return None;
            }
            shared.is_pending = true;

            let mut transcript = lock(&self.transcript);
            transcript.push(Exchange::new(question));

            // The indicator only runs with an entry to decorate.
            if !transcript.is_empty() {
                shared.indicator = Some(TypingIndicator::start(Arc::clone(&self.transcript)));
            }
        }

        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.shared);
        let transcript = Arc::clone(&self.transcript);
        let question = question.to_string();

        Some(tokio::spawn(async move {
            let outcome = service.ask(&question).await;

            let mut shared = lock(&shared);

            // Cancel the animation in the same step that finalizes the
            // answer, so no tick can land after the real text.
            if let Some(indicator) = shared.indicator.take() {
                indicator.stop();
            }

            let answer = outcome.unwrap_or_else(|_| FALLBACK_ANSWER.to_string());
            if let Some(last) = lock(&transcript).last_mut() {
                last.answer = answer;
            }

            shared.pending_input.clear();
            shared.input_locked = false;
            shared.is_pending = false;
        }))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
