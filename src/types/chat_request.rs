use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// The raw user message text.
    pub message: String,
}

impl ChatRequest {
    /// Create a new `ChatRequest` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn serializes_message_field() {
        let req = ChatRequest::new("How do I enable row level security?");
        assert_eq!(
            to_value(&req).unwrap(),
            json!({"message": "How do I enable row level security?"})
        );
    }
}
