use std::fmt;

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[+]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", label(kind), text),
    };
    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    match kind {
        MessageKind::Section => println!("\n{}", apply_style(kind, message)),
        _ => println!("{}", apply_style(kind, message)),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
