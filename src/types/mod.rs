// Public modules
pub mod chart_series;
pub mod chat_reply;
pub mod chat_request;
pub mod conversation_record;
pub mod dashboard_report;
pub mod feedback_ack;
pub mod feedback_request;
pub mod feedback_state;
pub mod feedback_stats;
pub mod message;
pub mod message_origin;
pub mod rating;
pub mod response_time_stats;
pub mod stats_snapshot;
pub mod theme;
pub mod top_question;

// Re-exports
pub use chart_series::ChartSeries;
pub use chat_reply::ChatReply;
pub use chat_request::ChatRequest;
pub use conversation_record::ConversationRecord;
pub use dashboard_report::DashboardReport;
pub use feedback_ack::FeedbackAck;
pub use feedback_request::FeedbackRequest;
pub use feedback_state::FeedbackState;
pub use feedback_stats::FeedbackStats;
pub use message::Message;
pub use message_origin::{MessageOrigin, MessageOriginParseError};
pub use rating::{Rating, RatingParseError};
pub use response_time_stats::ResponseTimeStats;
pub use stats_snapshot::StatsSnapshot;
pub use theme::{Theme, ThemeParseError};
pub use top_question::TopQuestion;
