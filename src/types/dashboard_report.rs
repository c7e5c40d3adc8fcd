use serde::{Deserialize, Serialize};

use crate::types::{ChartSeries, ConversationRecord, FeedbackStats, ResponseTimeStats, TopQuestion};

/// Response body for `GET /dashboard`: the full analytics report.
///
/// Every section defaults to empty so a partial report (e.g. from a
/// backend with no conversations yet) still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardReport {
    /// All-time query count.
    #[serde(default)]
    pub total_queries: u64,

    /// Queries per day over the reporting window.
    #[serde(default)]
    pub queries_by_date: ChartSeries,

    /// Query counts by classified intent.
    #[serde(default)]
    pub top_intents: ChartSeries,

    /// Aggregate response-time figures.
    #[serde(default)]
    pub response_time: ResponseTimeStats,

    /// Aggregate feedback figures.
    #[serde(default)]
    pub feedback_stats: FeedbackStats,

    /// Most frequently asked questions.
    #[serde(default)]
    pub top_questions: Vec<TopQuestion>,

    /// Most recent conversations.
    #[serde(default)]
    pub recent_conversations: Vec<ConversationRecord>,
}
