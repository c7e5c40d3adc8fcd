//! Transport seam between the session controller and the network.
//!
//! [`Session`](crate::Session) and [`StatsPoller`](crate::StatsPoller) are
//! generic over this trait rather than over [`SupportClient`] directly, so
//! the protocol behavior can be exercised against a scripted transport
//! with call counters.

use crate::client::SupportClient;
use crate::error::Result;
use crate::types::{ChatReply, FeedbackAck, Rating, StatsSnapshot};

/// The three network operations of the chat-session protocol.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Submit one user message and return the backend's reply.
    async fn chat(&self, message: &str) -> Result<ChatReply>;

    /// Submit a rating for a conversation.
    async fn feedback(&self, conversation_id: u64, rating: Rating) -> Result<FeedbackAck>;

    /// Fetch the current aggregate usage counters.
    async fn stats(&self) -> Result<StatsSnapshot>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn chat(&self, message: &str) -> Result<ChatReply> {
        (**self).chat(message).await
    }

    async fn feedback(&self, conversation_id: u64, rating: Rating) -> Result<FeedbackAck> {
        (**self).feedback(conversation_id, rating).await
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        (**self).stats().await
    }
}

#[async_trait::async_trait]
impl Transport for SupportClient {
    async fn chat(&self, message: &str) -> Result<ChatReply> {
        SupportClient::chat(self, message).await
    }

    async fn feedback(&self, conversation_id: u64, rating: Rating) -> Result<FeedbackAck> {
        SupportClient::feedback(self, conversation_id, rating).await
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        SupportClient::stats(self).await
    }
}
