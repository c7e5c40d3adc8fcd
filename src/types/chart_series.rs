use serde::{Deserialize, Serialize};

/// A labeled numeric series from the dashboard report, e.g. queries per
/// day or queries per intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChartSeries {
    /// Category labels, parallel to `data`.
    pub labels: Vec<String>,

    /// The series values.
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Iterate over (label, value) pairs, stopping at the shorter side if
    /// the backend ever sends mismatched lengths.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .zip(self.data.iter())
            .map(|(label, value)| (label.as_str(), *value))
    }

    /// The largest value in the series, or zero when empty.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn deserializes_labels_and_data() {
        let series: ChartSeries = from_value(json!({
            "labels": ["2026-08-24", "2026-08-25"],
            "data": [12, 30]
        }))
        .unwrap();
        assert_eq!(series.points().count(), 2);
        assert_eq!(series.max_value(), 30.0);
    }

    #[test]
    fn mismatched_lengths_truncate() {
        let series = ChartSeries {
            labels: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            data: vec![1.0],
        };
        assert_eq!(series.points().count(), 1);
    }
}
