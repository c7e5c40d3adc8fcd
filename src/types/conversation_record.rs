use serde::{Deserialize, Serialize};

use crate::types::Rating;

/// One row from the recent-conversations table in the dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationRecord {
    /// Backend conversation identifier.
    pub id: u64,

    /// Backend session identifier the conversation belongs to.
    pub session_id: String,

    /// What the user asked.
    pub user_message: String,

    /// What the agent answered.
    pub bot_response: String,

    /// The classified intent, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    /// How long the backend took to answer, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,

    /// The recorded rating, if the turn received feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// When the conversation happened, as reported by the backend.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_backend_shape() {
        let record: ConversationRecord = from_value(json!({
            "id": 42,
            "session_id": "8f14e45f-ceea-4673-9b5d-0a8a6e6bc2a1",
            "user_message": "How do I reset my password?",
            "bot_response": "Use the password reset flow.",
            "intent": "question",
            "response_time_ms": 930.4,
            "rating": 1,
            "created_at": "2026-08-29 14:03:11"
        }))
        .unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.rating, Some(Rating::Up));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let record: ConversationRecord = from_value(json!({
            "id": 7,
            "session_id": "s",
            "user_message": "hi",
            "bot_response": "hello",
            "created_at": "2026-08-29 14:05:00"
        }))
        .unwrap();
        assert!(record.intent.is_none());
        assert!(record.rating.is_none());
    }
}
