//! Chat mode UI components.

use crate::auth::SessionIdentity;
use crate::chat::transcript::Exchange;
use crate::ui::Style;

use super::command;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(identity: &SessionIdentity) {
    println!(
        "{} {} - Hello, {}",
        Style::header("chatbox"),
        Style::version(format!("v{VERSION}")),
        Style::value(&identity.username)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_identity(identity: &SessionIdentity) {
    println!(
        "  {}  {}",
        Style::label("username"),
        Style::value(&identity.username)
    );
    println!(
        "  {}      {}",
        Style::label("role"),
        Style::value(&identity.role)
    );
    println!();
}

pub fn print_help(admin: bool) {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in command::help_entries(admin) {
        println!("  {:<18} {}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

/// Question above answer, the same layout as the web transcript.
pub fn print_exchange(exchange: &Exchange) {
    println!("{}", Style::question(&exchange.question));
    println!("{}", exchange.answer);
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
