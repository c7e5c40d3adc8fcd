use serde::{Deserialize, Serialize};

/// Response body for `POST /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedbackAck {
    /// Whether the backend recorded the feedback.
    #[serde(default)]
    pub success: bool,

    /// The conversation the feedback was recorded against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<u64>,

    /// Backend-reported error text, when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
