use serde::{Deserialize, Serialize};

/// Aggregate feedback figures from the dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedbackStats {
    /// Number of thumbs-up ratings.
    pub thumbs_up: u64,

    /// Number of thumbs-down ratings.
    pub thumbs_down: u64,

    /// Number of conversations with any rating.
    pub total_rated: u64,

    /// Total number of conversations, rated or not.
    pub total_conversations: u64,

    /// Thumbs-up share of rated conversations, as a percentage.
    pub thumbs_up_percent: f64,

    /// Thumbs-down share of rated conversations, as a percentage.
    pub thumbs_down_percent: f64,

    /// Share of conversations that received any rating, as a percentage.
    pub feedback_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_backend_shape() {
        let stats: FeedbackStats = from_value(json!({
            "thumbs_up": 31,
            "thumbs_down": 4,
            "total_rated": 35,
            "total_conversations": 120,
            "thumbs_up_percent": 88.6,
            "thumbs_down_percent": 11.4,
            "feedback_rate": 29.2
        }))
        .unwrap();
        assert_eq!(stats.thumbs_up, 31);
        assert_eq!(stats.feedback_rate, 29.2);
    }
}
