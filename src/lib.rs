// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod poller;
pub mod render;
pub mod session;
pub mod theme;
pub mod transport;
pub mod types;
pub mod utils;

mod observability;

// Re-exports
pub use client::SupportClient;
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use poller::{DEFAULT_POLL_INTERVAL, StatsPoller};
pub use render::{PlainTextRenderer, Renderer, render_dashboard};
pub use session::{CONNECTION_ERROR_REPLY, FeedbackOutcome, Session, SubmitOutcome};
pub use theme::ThemeStore;
pub use transport::Transport;
pub use types::*;
