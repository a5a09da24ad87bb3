//! Interactive chat session: the transcript state machine, the typing
//! indicator, and the REPL that drives them.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod indicator;
mod repl;
mod transcript;
mod ui;

pub use controller::{ChatController, FALLBACK_ANSWER, Key};
pub use indicator::TypingIndicator;
pub use repl::ChatRepl;
pub use transcript::{Exchange, Transcript};
