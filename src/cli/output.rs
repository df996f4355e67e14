use colored::Colorize;
use std::fmt;
use std::io::IsTerminal;

use crate::config::Preferences;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Formats `message` for `kind`. Errors carry an `Error:` prefix; colour is
/// applied only when `use_color` is set.
pub fn format_message(kind: MessageKind, message: impl fmt::Display, use_color: bool) -> String {
    let text = match kind {
        MessageKind::Success => message.to_string(),
        MessageKind::Error => format!("Error: {message}"),
    };

    if !use_color {
        return text;
    }
    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
    }
}

/// Success lines go to stdout, errors to stderr.
pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let plain = Preferences::from_env().plain_mode;
    match kind {
        MessageKind::Success => {
            let use_color = !plain && std::io::stdout().is_terminal();
            println!("{}", format_message(kind, message, use_color));
        }
        MessageKind::Error => {
            let use_color = !plain && std::io::stderr().is_terminal();
            eprintln!("{}", format_message(kind, message, use_color));
        }
    }
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}
