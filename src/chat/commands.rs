//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the backend.

use crate::types::{Rating, Theme};

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the local transcript and feedback records.
    Clear,

    /// Rate the most recent agent reply.
    Feedback(Rating),

    /// Switch the theme, or toggle when no theme is named.
    Theme(Option<Theme>),

    /// Save the transcript to a specific file.
    SaveTranscript(String),

    /// Load a transcript from a file.
    LoadTranscript(String),

    /// Fetch and display the analytics dashboard.
    Dashboard,

    /// Display the latest stats snapshot and session counters.
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be submitted as a regular message.
///
/// # Examples
///
/// ```
/// # use liaison::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/up").is_some());
/// assert!(parse_command("How do I reset my password?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        "dashboard" => ChatCommand::Dashboard,
        "up" => ChatCommand::Feedback(Rating::Up),
        "down" => ChatCommand::Feedback(Rating::Down),
        "theme" => match argument {
            Some(arg) => match arg.parse::<Theme>() {
                Ok(theme) => ChatCommand::Theme(Some(theme)),
                Err(_) => ChatCommand::Invalid("/theme expects 'light' or 'dark'".to_string()),
            },
            None => ChatCommand::Theme(None),
        },
        "save" => match argument {
            Some(arg) => ChatCommand::SaveTranscript(arg.to_string()),
            None => ChatCommand::Invalid("/save requires a file path".to_string()),
        },
        "load" => match argument {
            Some(arg) => ChatCommand::LoadTranscript(arg.to_string()),
            None => ChatCommand::Invalid("/load requires a file path".to_string()),
        },
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns the help text listing available commands.
pub fn help_text() -> String {
    [
        "Available commands:",
        "  /help            Show this help",
        "  /clear           Clear the transcript",
        "  /up              Thumbs-up the last agent reply",
        "  /down            Thumbs-down the last agent reply",
        "  /stats           Show backend stats and session counters",
        "  /dashboard       Show the analytics dashboard",
        "  /theme [light|dark]  Switch (or toggle) the theme",
        "  /save <path>     Save the transcript to a file",
        "  /load <path>     Load a transcript from a file",
        "  /quit            Exit",
    ]
    .join("\n")
}
