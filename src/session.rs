//! The chat-session controller.
//!
//! This module provides [`Session`], which owns the append-only transcript,
//! the pending-submission guard, and the per-conversation feedback records,
//! and drives the three network operations of the protocol through a
//! [`Transport`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};

use crate::error::Result;
use crate::observability::{
    FEEDBACK_ERRORS, FEEDBACK_SENT, SESSION_FALLBACKS, SESSION_SUBMITS_IGNORED, SESSION_TURNS,
};
use crate::transport::Transport;
use crate::types::{FeedbackState, Message, MessageOrigin, Rating, StatsSnapshot};

/// Fixed agent text appended when the chat request never reaches the
/// backend or its response cannot be read.
pub const CONNECTION_ERROR_REPLY: &str =
    "Connection error. Please check if the server is running.";

/// Submission state for the chat flow. At most one chat request is in
/// flight at a time; a submit while `Pending` is a no-op, not a queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Pending,
}

/// What happened to a [`Session::submit_message`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Precondition not met (empty text or a submission already pending);
    /// nothing was appended and no request was issued.
    Ignored,

    /// The turn completed with a backend reply. `conversation_id` is set
    /// when the reply was a success and the turn is feedback-eligible.
    Replied {
        /// The backend conversation identifier, if the turn succeeded.
        conversation_id: Option<u64>,
    },

    /// The request failed in transit; the fixed connection-error message
    /// was appended instead.
    ConnectionFailed,
}

/// What happened to a [`Session::submit_feedback`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Feedback for this conversation was already acknowledged; no request
    /// was issued.
    Ignored,

    /// The backend acknowledged the rating; no further feedback will be
    /// accepted for this conversation.
    Sent,

    /// The request failed or the backend declined it. The optimistic
    /// rating stays recorded locally and a retry remains possible.
    Failed,
}

/// On-disk transcript wrapper, versioned for forward compatibility.
#[derive(Serialize, Deserialize)]
struct TranscriptFile {
    version: u8,
    messages: Vec<Message>,
}

impl TranscriptFile {
    fn new(messages: &[Message]) -> Self {
        Self {
            version: 1,
            messages: messages.to_vec(),
        }
    }
}

/// A chat session: the ordered transcript, the pending guard, the
/// feedback records, and the latest stats snapshot.
///
/// The transcript is append-only. Messages are never mutated or removed
/// after insertion; feedback is tracked in a separate map keyed by
/// conversation identifier. All mutation goes through the operations on
/// this type.
pub struct Session<T: Transport> {
    transport: T,
    transcript: Vec<Message>,
    state: SubmitState,
    feedback: HashMap<u64, FeedbackState>,
    stats: StatsSnapshot,
    next_id: u64,
}

impl<T: Transport> Session<T> {
    /// Creates a new session over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            transcript: Vec::new(),
            state: SubmitState::Idle,
            feedback: HashMap::new(),
            stats: StatsSnapshot::default(),
            next_id: 1,
        }
    }

    /// Seeds the transcript with an agent greeting, as the chat view shows
    /// on startup. Carries no conversation identifier, so it is never
    /// feedback-eligible.
    pub fn push_greeting(&mut self, text: impl Into<String>) {
        let id = self.allocate_id();
        self.transcript
            .push(Message::new(id, text, MessageOrigin::Agent));
    }

    /// Submits one user message.
    ///
    /// The user's message is appended before the request is issued, so it
    /// is visible regardless of the outcome. Exactly one agent message is
    /// appended after the request settles: the reply text on success, the
    /// backend's error text on a server-reported error, or the fixed
    /// connection-error text on transport failure. The pending guard is
    /// released on every path.
    pub async fn submit_message(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() || self.state == SubmitState::Pending {
            SESSION_SUBMITS_IGNORED.click();
            return SubmitOutcome::Ignored;
        }

        let id = self.allocate_id();
        self.transcript
            .push(Message::new(id, text, MessageOrigin::User));
        self.state = SubmitState::Pending;

        let outcome = match self.transport.chat(text).await {
            Ok(reply) => {
                let conversation_id = if reply.is_success() {
                    reply.conversation_id
                } else {
                    // An HTTP-ok error payload carries no conversation, and
                    // error turns must never be feedback-eligible.
                    None
                };
                let id = self.allocate_id();
                let mut message = Message::new(id, reply.text(), MessageOrigin::Agent);
                if let Some(conversation_id) = conversation_id {
                    message = message.with_conversation_id(conversation_id);
                }
                self.transcript.push(message);
                SESSION_TURNS.click();
                SubmitOutcome::Replied { conversation_id }
            }
            Err(_) => {
                let id = self.allocate_id();
                self.transcript
                    .push(Message::new(id, CONNECTION_ERROR_REPLY, MessageOrigin::Agent));
                SESSION_FALLBACKS.click();
                SubmitOutcome::ConnectionFailed
            }
        };

        self.state = SubmitState::Idle;
        outcome
    }

    /// Submits a rating for a conversation.
    ///
    /// The rating is recorded optimistically before the request. Once the
    /// backend acknowledges a rating, the `sent` flag gates out any
    /// further submissions for that conversation. A failed send leaves
    /// the optimistic rating visible but unsent; it is not rolled back.
    pub async fn submit_feedback(&mut self, conversation_id: u64, rating: Rating) -> FeedbackOutcome {
        let state = self
            .feedback
            .entry(conversation_id)
            .or_insert_with(|| FeedbackState::new(conversation_id));
        if state.sent {
            return FeedbackOutcome::Ignored;
        }
        state.rating = Some(rating);

        match self.transport.feedback(conversation_id, rating).await {
            Ok(ack) if ack.success => {
                if let Some(state) = self.feedback.get_mut(&conversation_id) {
                    state.sent = true;
                }
                FEEDBACK_SENT.click();
                FeedbackOutcome::Sent
            }
            Ok(_) | Err(_) => {
                FEEDBACK_ERRORS.click();
                FeedbackOutcome::Failed
            }
        }
    }

    /// Fetches the stats snapshot once.
    ///
    /// On success the snapshot is replaced wholesale; on failure the
    /// previous snapshot is retained. Returns whether the fetch succeeded.
    pub async fn refresh_stats(&mut self) -> bool {
        match self.transport.stats().await {
            Ok(snapshot) => {
                self.stats = snapshot;
                true
            }
            Err(_) => false,
        }
    }

    /// The ordered transcript.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Returns the number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Whether a chat submission is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// The latest stats snapshot.
    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    /// The feedback record for a conversation, if any rating was attempted.
    pub fn feedback_for(&self, conversation_id: u64) -> Option<&FeedbackState> {
        self.feedback.get(&conversation_id)
    }

    /// The conversation identifier of the most recent feedback-eligible
    /// agent message, if any.
    pub fn last_conversation_id(&self) -> Option<u64> {
        self.transcript
            .iter()
            .rev()
            .find_map(|m| if m.origin.is_agent() { m.conversation_id } else { None })
    }

    /// Clears the transcript and feedback records. The stats snapshot is
    /// unaffected; it belongs to the backend, not the conversation.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.feedback.clear();
        self.next_id = 1;
    }

    /// Saves the transcript to a JSON file.
    pub fn save_transcript(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, &TranscriptFile::new(&self.transcript))?;
        Ok(())
    }

    /// Replaces the transcript with the contents of a JSON file written by
    /// [`Session::save_transcript`]. Feedback records are cleared; the
    /// `sent` gate lives with the backend conversation, not the file.
    pub fn load_transcript(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let transcript: TranscriptFile = from_reader(reader)?;
        self.next_id = transcript
            .messages
            .iter()
            .map(|m| m.id + 1)
            .max()
            .unwrap_or(1);
        self.transcript = transcript.messages;
        self.feedback.clear();
        Ok(())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
