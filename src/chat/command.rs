use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description, admin-only)
const SLASH_COMMANDS: &[(&str, &str, bool)] = &[
    ("/help", "Show available commands", false),
    ("/whoami", "Show the logged-in user", false),
    ("/upload", "Upload a document (.pdf or .docx)", true),
    ("/logout", "Log out and exit", false),
    ("/quit", "Exit without logging out", false),
];

/// Slash command autocompleter.
///
/// Admin-only commands are absent from the suggestions for other roles,
/// mirroring the hidden upload form in the web client.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter {
    pub admin: bool,
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(_, _, admin_only)| !admin_only || self.admin)
            .filter(|(cmd, _, _)| cmd.starts_with(input))
            .map(|(cmd, desc, _)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Help,
    Whoami,
    Upload { path: Option<String> },
    Logout,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("help") => Input::Command(SlashCommand::Help),
        Some("whoami") => Input::Command(SlashCommand::Whoami),
        Some("upload") => Input::Command(SlashCommand::Upload {
            path: parts.get(1).map(ToString::to_string),
        }),
        Some("logout") => Input::Command(SlashCommand::Logout),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

/// Commands listed by `/help`, filtered by role.
pub fn help_entries(admin: bool) -> Vec<(&'static str, &'static str)> {
    SLASH_COMMANDS
        .iter()
        .filter(|(_, _, admin_only)| !admin_only || admin)
        .map(|(cmd, desc, _)| (*cmd, *desc))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("What is 2+2?") {
            Input::Text(text) => assert_eq!(text, "What is 2+2?"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_help_command() {
        assert!(matches!(
            parse_input("/help"),
            Input::Command(SlashCommand::Help)
        ));
    }

    #[test]
    fn test_parse_logout_command() {
        assert!(matches!(
            parse_input("/logout"),
            Input::Command(SlashCommand::Logout)
        ));
    }

    #[test]
    fn test_parse_quit_commands() {
        for raw in ["/quit", "/exit", "/q"] {
            assert!(matches!(
                parse_input(raw),
                Input::Command(SlashCommand::Quit)
            ));
        }
    }

    #[test]
    fn test_parse_upload_with_path() {
        match parse_input("/upload ./manual.pdf") {
            Input::Command(SlashCommand::Upload { path }) => {
                assert_eq!(path.as_deref(), Some("./manual.pdf"));
            }
            _ => panic!("Expected Input::Command(SlashCommand::Upload)"),
        }
    }

    #[test]
    fn test_parse_upload_without_path() {
        match parse_input("/upload") {
            Input::Command(SlashCommand::Upload { path }) => assert!(path.is_none()),
            _ => panic!("Expected Input::Command(SlashCommand::Upload)"),
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/unknown") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "unknown"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter { admin: true };
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_hides_upload_for_non_admin() {
        let mut completer = SlashCommandCompleter { admin: false };
        let suggestions = completer.get_suggestions("/").unwrap();
        assert!(!suggestions.iter().any(|s| s.starts_with("/upload")));
    }

    #[test]
    fn test_completer_shows_upload_for_admin() {
        let mut completer = SlashCommandCompleter { admin: true };
        let suggestions = completer.get_suggestions("/up").unwrap();
        assert!(suggestions.iter().any(|s| s.starts_with("/upload")));
    }

    #[test]
    fn test_help_entries_respect_role() {
        assert!(help_entries(false).iter().all(|(cmd, _)| *cmd != "/upload"));
        assert!(help_entries(true).iter().any(|(cmd, _)| *cmd == "/upload"));
    }
}
