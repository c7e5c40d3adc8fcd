use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::types::MessageOrigin;

/// Display format for message timestamps (24-hour clock, as shown next to
/// each chat bubble).
const CLOCK_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second]");

/// A single entry in the local transcript.
///
/// Messages are client-owned and immutable once appended. Feedback state is
/// tracked separately, keyed by `conversation_id`, so a message is never
/// mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Session-local identifier, used only as a stable rendering key.
    pub id: u64,

    /// The message body.
    pub text: String,

    /// Who authored the message.
    pub origin: MessageOrigin,

    /// Client-local creation time. Recorded for display; ordering is by
    /// insertion, not by timestamp.
    #[serde(with = "crate::utils::time")]
    pub created_at: OffsetDateTime,

    /// Backend-issued conversation identifier. Present only on agent
    /// messages from successful turns; its presence is what makes a turn
    /// feedback-eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<u64>,
}

impl Message {
    /// Create a new message stamped with the current time.
    pub fn new(id: u64, text: impl Into<String>, origin: MessageOrigin) -> Self {
        Self {
            id,
            text: text.into(),
            origin,
            created_at: OffsetDateTime::now_utc(),
            conversation_id: None,
        }
    }

    /// Attach the backend's conversation identifier.
    pub fn with_conversation_id(mut self, conversation_id: u64) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Whether feedback controls should be offered for this message.
    pub fn feedback_eligible(&self) -> bool {
        self.origin.is_agent() && self.conversation_id.is_some()
    }

    /// The creation time formatted as HH:MM:SS for display.
    pub fn clock_time(&self) -> String {
        self.created_at
            .format(CLOCK_FORMAT)
            .unwrap_or_else(|_| String::new())
    }
}
