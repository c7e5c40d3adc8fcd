use serde::{Deserialize, Serialize};

/// One of the most frequently asked questions, from the dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopQuestion {
    /// The question text, truncated by the backend past 100 characters.
    pub question: String,

    /// How many times it was asked.
    pub count: u64,

    /// The classified intent, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_backend_shape() {
        let q: TopQuestion = from_value(json!({
            "question": "How do I reset my password?",
            "count": 17,
            "intent": "question"
        }))
        .unwrap();
        assert_eq!(q.count, 17);
        assert_eq!(q.intent.as_deref(), Some("question"));
    }
}
