use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{ChatController, Key};
use super::ui;
use crate::api::{AnswerService, ApiClient};
use crate::auth::{SessionIdentity, SessionStore};
use crate::cli::commands::upload;
use crate::output;
use crate::status;

/// How often the renderer polls the transcript while a question is
/// pending, so the typing dots are visible as they change.
const RENDER_POLL: Duration = Duration::from_millis(100);

/// The interactive chat loop.
///
/// Reads lines, routes slash commands, and drives the controller for
/// everything else.
pub struct ChatRepl {
    controller: ChatController,
    client: Arc<ApiClient>,
    store: SessionStore,
}

impl ChatRepl {
    pub fn new(client: Arc<ApiClient>, identity: SessionIdentity, store: SessionStore) -> Self {
        let service: Arc<dyn AnswerService> = client.clone();
        let controller = ChatController::new(service, identity);
        Self {
            controller,
            client,
            store,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.controller.identity());

        let admin = self.controller.identity().is_admin();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter { admin })
                .with_help_message("Type your question here, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {
                        // An empty Enter is a focus without a submission:
                        // the input clears and logout locks until the next
                        // settled question, as in the web client.
                        self.controller.focus_input();
                    }
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.ask_and_print(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the loop should end.
    async fn handle_command(&self, cmd: SlashCommand) -> Result<bool> {
        let admin = self.controller.identity().is_admin();

        match cmd {
            SlashCommand::Help => {
                ui::print_help(admin);
                Ok(true)
            }
            SlashCommand::Whoami => {
                ui::print_identity(self.controller.identity());
                Ok(true)
            }
            SlashCommand::Upload { path } => {
                self.handle_upload(admin, path.as_deref()).await;
                Ok(true)
            }
            SlashCommand::Logout => {
                if self.controller.input_locked() {
                    ui::print_error("Logout is unavailable right now. Submit a question first.");
                    return Ok(true);
                }
                self.store.clear()?;
                status!("Logged out.");
                Ok(false)
            }
            SlashCommand::Quit => Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                Ok(true)
            }
        }
    }

    async fn handle_upload(&self, admin: bool, path: Option<&str>) {
        if !admin {
            ui::print_error("Document upload requires the admin role.");
            return;
        }

        let Some(path) = path else {
            println!("Usage: /upload <file>");
            return;
        };

        if let Err(e) = upload::upload_document(&self.client, Path::new(path)).await {
            ui::print_error(&e.to_string());
        }
    }

    async fn ask_and_print(&self, text: &str) -> Result<()> {
        // Clicking into the field clears it and locks logout; typing and
        // Enter follow.
        self.controller.focus_input();
        self.controller.set_input(text);

        let Some(mut handle) = self.controller.key_press(Key::Enter) else {
            return Ok(());
        };

        // Poll the transcript while pending so the dots show up live.
        let mut ticker = time::interval(RENDER_POLL);
        let mut shown = String::new();
        loop {
            tokio::select! {
                res = &mut handle => {
                    res?;
                    break;
                }
                _ = ticker.tick() => {
                    if let Some(last) = self.controller.last_exchange()
                        && last.answer != shown
                    {
                        shown = last.answer;
                        eprint!("\r{shown}");
                        output::flush_stderr();
                    }
                }
            }
        }

        if !shown.is_empty() {
            eprint!("\r{}\r", " ".repeat(shown.len()));
            output::flush_stderr();
        }

        if let Some(last) = self.controller.last_exchange() {
            ui::print_exchange(&last);
        }

        Ok(())
    }
}
