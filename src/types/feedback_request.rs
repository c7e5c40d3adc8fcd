use serde::{Deserialize, Serialize};

use crate::types::Rating;

/// Request body for `POST /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRequest {
    /// The backend conversation this feedback applies to.
    pub conversation_id: u64,

    /// The rating, serialized as `1` or `-1`.
    pub rating: Rating,

    /// Optional free-text elaboration. The backend accepts but does not
    /// require it; the chat UI never sends one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_text: Option<String>,
}

impl FeedbackRequest {
    /// Create a new `FeedbackRequest` for the given conversation.
    pub fn new(conversation_id: u64, rating: Rating) -> Self {
        Self {
            conversation_id,
            rating,
            feedback_text: None,
        }
    }
}
