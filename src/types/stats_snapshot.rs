use serde::{Deserialize, Serialize};

/// Response body for `GET /stats`: the aggregate counters shown in the
/// chat header.
///
/// Snapshots are replaced wholesale on each successful poll, never merged.
/// The default (offline, zero counters) stands in until the first
/// successful fetch; after that a failed poll retains the previous
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    /// Backend liveness flag.
    pub online: bool,

    /// Number of queries the backend answered today.
    pub queries_today: u64,

    /// Average backend response time in milliseconds.
    pub avg_response_time_ms: f64,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self {
            online: false,
            queries_today: 0,
            avg_response_time_ms: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_backend_shape() {
        let snapshot: StatsSnapshot = from_value(json!({
            "online": true,
            "queries_today": 128,
            "avg_response_time_ms": 842.5
        }))
        .unwrap();
        assert!(snapshot.online);
        assert_eq!(snapshot.queries_today, 128);
        assert_eq!(snapshot.avg_response_time_ms, 842.5);
    }

    #[test]
    fn default_is_offline_zero() {
        let snapshot = StatsSnapshot::default();
        assert!(!snapshot.online);
        assert_eq!(snapshot.queries_today, 0);
        assert_eq!(snapshot.avg_response_time_ms, 0.0);
    }
}
