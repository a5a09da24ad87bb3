//! # chatbox - Terminal chat client
//!
//! `chatbox` is a command-line front-end for a document Q&A backend. It
//! covers the same ground as the original web client: a login gate, an
//! interactive question/answer session, and an admin-only document
//! upload.
//!
//! ## Quick Start
//!
//! ```bash
//! # Log in (stores the session)
//! chatbox login
//!
//! # Chat interactively
//! chatbox
//!
//! # Upload a document (admin only)
//! chatbox upload ./manual.pdf
//!
//! # Log out
//! chatbox logout
//! ```
//!
//! ## Configuration
//!
//! The backend base URL lives in `~/.config/chatbox/config.toml`:
//!
//! ```toml
//! [chatbox]
//! backend_url = "http://localhost:8000"
//! ```
//!
//! or is passed per invocation with `--endpoint`.

/// HTTP client for the backend API (ask, login, upload).
pub mod api;

/// Login session identity and its on-disk store.
pub mod auth;

/// Interactive chat session and its state machine.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and session state.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
