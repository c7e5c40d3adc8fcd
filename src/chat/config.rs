//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::path::PathBuf;
use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::poller::DEFAULT_POLL_INTERVAL;
use crate::types::Theme;

/// Default backend base URL, matching the development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Environment variable consulted when `--base-url` is not given.
pub const BASE_URL_ENV: &str = "LIAISON_BASE_URL";

/// File name of the persisted theme flag, under the home directory.
const THEME_FILE: &str = ".liaison-theme";

/// Default greeting the agent shows before the first turn.
pub const DEFAULT_GREETING: &str =
    "Connection established. I'm your support agent. Ask me anything about \
     authentication, databases, storage, or getting started.";

/// Command-line arguments for the liaison-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Backend base URL.
    #[arrrg(optional, "Backend base URL (default: http://localhost:5000/)", "URL")]
    pub base_url: Option<String>,

    /// Theme override for this run.
    #[arrrg(optional, "Theme to use: light or dark (default: persisted flag)", "THEME")]
    pub theme: Option<String>,

    /// Path to auto-save the transcript after each turn.
    #[arrrg(optional, "Auto-save transcript to this path", "PATH")]
    pub transcript: Option<String>,

    /// Stats refresh interval in seconds.
    #[arrrg(optional, "Stats refresh interval in seconds (default: 30)", "SECONDS")]
    pub stats_interval: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Suppress the startup greeting message.
    #[arrrg(flag, "Suppress the startup greeting")]
    pub no_greeting: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments, the environment, and defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The backend base URL.
    pub base_url: String,

    /// Explicit theme override; `None` means use the persisted flag.
    pub theme: Option<Theme>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to show the startup greeting.
    pub greeting: bool,

    /// Path to persist transcripts automatically after each agent turn.
    pub transcript_path: Option<PathBuf>,

    /// Interval between stats refreshes.
    pub stats_interval: Duration,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: `LIAISON_BASE_URL` or http://localhost:5000/
    /// - Theme: the persisted flag
    /// - Color: enabled
    /// - Greeting: shown
    /// - Stats interval: 30 seconds
    pub fn new() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            theme: None,
            use_color: true,
            greeting: true,
            transcript_path: None,
            stats_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the theme override.
    pub fn with_theme(mut self, theme: Option<Theme>) -> Self {
        self.theme = theme;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Suppresses the startup greeting.
    pub fn without_greeting(mut self) -> Self {
        self.greeting = false;
        self
    }

    /// Sets the transcript auto-save path.
    pub fn with_transcript_path(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_path = path;
        self
    }

    /// Sets the stats refresh interval.
    pub fn with_stats_interval(mut self, interval: Duration) -> Self {
        self.stats_interval = interval;
        self
    }

    /// The path of the persisted theme flag: `~/.liaison-theme`, or the
    /// file name alone when no home directory is known.
    pub fn theme_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(THEME_FILE),
            None => PathBuf::from(THEME_FILE),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(base_url) = args.base_url {
            config.base_url = base_url;
        }
        config.theme = args.theme.and_then(|s| s.parse::<Theme>().ok());
        config.use_color = !args.no_color;
        config.greeting = !args.no_greeting;
        config.transcript_path = args.transcript.map(PathBuf::from);
        if let Some(seconds) = args.stats_interval {
            config.stats_interval = Duration::from_secs(seconds.max(1));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use arrrg::CommandLine;

    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            ..ChatConfig::new()
        };
        assert!(config.theme.is_none());
        assert!(config.use_color);
        assert!(config.greeting);
        assert!(config.transcript_path.is_none());
        assert_eq!(config.stats_interval, Duration::from_secs(30));
    }

    #[test]
    fn args_parse_from_argument_vector() {
        let (args, free) = ChatArgs::from_arguments_relaxed(
            "liaison-chat [OPTIONS]",
            &[
                "--base-url",
                "http://support.example.com/",
                "--stats-interval",
                "5",
                "--no-color",
            ],
        );
        assert_eq!(
            args.base_url.as_deref(),
            Some("http://support.example.com/")
        );
        assert_eq!(args.stats_interval, Some(5));
        assert!(args.no_color);
        assert!(free.is_empty());
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            base_url: Some("http://support.example.com/".to_string()),
            theme: Some("light".to_string()),
            transcript: Some("chat.json".to_string()),
            stats_interval: Some(5),
            no_color: true,
            no_greeting: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.base_url, "http://support.example.com/");
        assert_eq!(config.theme, Some(Theme::Light));
        assert_eq!(config.transcript_path, Some(PathBuf::from("chat.json")));
        assert_eq!(config.stats_interval, Duration::from_secs(5));
        assert!(!config.use_color);
        assert!(!config.greeting);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let args = ChatArgs {
            stats_interval: Some(0),
            ..ChatArgs::default()
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.stats_interval, Duration::from_secs(1));
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_base_url("http://backend:5000/")
            .with_theme(Some(Theme::Light))
            .without_color()
            .without_greeting()
            .with_transcript_path(Some(PathBuf::from("transcript.json")))
            .with_stats_interval(Duration::from_secs(10));

        assert_eq!(config.base_url, "http://backend:5000/");
        assert_eq!(config.theme, Some(Theme::Light));
        assert!(!config.use_color);
        assert!(!config.greeting);
        assert_eq!(
            config.transcript_path,
            Some(PathBuf::from("transcript.json"))
        );
        assert_eq!(config.stats_interval, Duration::from_secs(10));
    }
}
