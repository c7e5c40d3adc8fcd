use serde::{Deserialize, Serialize};

/// Fixed text shown when a reply carries neither a response nor an error.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error.";

/// Response body for `POST /chat`.
///
/// A successful turn carries `response` and `conversation_id`. The backend
/// may instead answer HTTP-ok with only an `error` field; both shapes
/// deserialize here and [`ChatReply::text`] picks the display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatReply {
    /// The agent's answer, absent when the backend reports an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Backend-issued identifier correlating this turn with later feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<u64>,

    /// Backend session identifier; the session cookie carries the same
    /// value, so clients normally ignore this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Backend-reported error text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatReply {
    /// The display text for this reply: `response`, then `error`, then a
    /// fixed fallback, in that priority order.
    pub fn text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(FALLBACK_REPLY)
    }

    /// Whether this reply represents a successful turn. Only successful
    /// turns are feedback-eligible.
    pub fn is_success(&self) -> bool {
        self.response.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_success_shape() {
        let json = json!({
            "response": "Use the password reset flow.",
            "conversation_id": 42,
            "session_id": "8f14e45f-ceea-4673-9b5d-0a8a6e6bc2a1"
        });

        let reply: ChatReply = from_value(json).unwrap();
        assert_eq!(reply.text(), "Use the password reset flow.");
        assert_eq!(reply.conversation_id, Some(42));
        assert!(reply.is_success());
    }

    #[test]
    fn deserializes_error_shape() {
        let reply: ChatReply = from_value(json!({"error": "model unavailable"})).unwrap();
        assert_eq!(reply.text(), "model unavailable");
        assert!(reply.conversation_id.is_none());
        assert!(!reply.is_success());
    }

    #[test]
    fn empty_reply_falls_back_to_fixed_text() {
        let reply: ChatReply = from_value(json!({})).unwrap();
        assert_eq!(reply.text(), FALLBACK_REPLY);
        assert!(!reply.is_success());
    }

    #[test]
    fn response_wins_over_error() {
        let reply = ChatReply {
            response: Some("answer".to_string()),
            error: Some("ignored".to_string()),
            ..Default::default()
        };
        assert_eq!(reply.text(), "answer");
    }
}
