use serde::{Deserialize, Serialize};

/// Aggregate response-time figures from the dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResponseTimeStats {
    /// Mean response time in milliseconds.
    pub average_ms: f64,

    /// Fastest recorded response in milliseconds.
    pub min_ms: f64,

    /// Slowest recorded response in milliseconds.
    pub max_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_backend_shape() {
        let stats: ResponseTimeStats = from_value(json!({
            "average_ms": 842.17,
            "min_ms": 120,
            "max_ms": 4310
        }))
        .unwrap();
        assert_eq!(stats.average_ms, 842.17);
        assert_eq!(stats.min_ms, 120.0);
        assert_eq!(stats.max_ms, 4310.0);
    }
}
