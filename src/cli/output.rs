use colored::Colorize;
use std::fmt;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_output,
        }
    }
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
    }
}

/// Renders `message` for the terminal. Plain mode returns the text untouched.
pub fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    if prefs.plain_mode {
        return text;
    }

    let formatted = format!("{} {}", icon(kind), text);
    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) {
    let formatted = format_message(kind, message, prefs);
    match kind {
        MessageKind::Error => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_keeps_text_verbatim() {
        let prefs = OutputPreferences { plain_mode: true };
        assert_eq!(
            format_message(MessageKind::Success, "Deposited $5.", &prefs),
            "Deposited $5."
        );
    }

    #[test]
    fn styled_mode_prefixes_icon() {
        colored::control::set_override(false);
        let prefs = OutputPreferences::default();
        assert_eq!(
            format_message(MessageKind::Warning, "Unknown action.", &prefs),
            "[!] Unknown action."
        );
        assert_eq!(
            format_message(MessageKind::Info, "Goodbye!", &prefs),
            "[i] Goodbye!"
        );
    }

    #[test]
    fn errors_use_cross_icon_unless_plain() {
        colored::control::set_override(false);
        assert_eq!(
            format_message(
                MessageKind::Error,
                "Error: input closed",
                &OutputPreferences::default()
            ),
            "[x] Error: input closed"
        );
        assert_eq!(
            format_message(
                MessageKind::Error,
                "Error: input closed",
                &OutputPreferences { plain_mode: true }
            ),
            "Error: input closed"
        );
    }

    #[test]
    fn preferences_follow_config() {
        let config = Config {
            plain_output: true,
            ..Config::default()
        };
        assert!(OutputPreferences::from(&config).plain_mode);
    }
}
