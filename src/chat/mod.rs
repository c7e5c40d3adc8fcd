//! Chat application module for interacting with the support backend.
//!
//! This module provides the REPL layer used by the liaison-chat binary:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: Slash command parsing and handling
//!
//! The session controller itself lives at the crate root in
//! [`crate::session`]; this module only wraps it for interactive use.

mod commands;
mod config;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{BASE_URL_ENV, ChatArgs, ChatConfig, DEFAULT_BASE_URL, DEFAULT_GREETING};
