use serde::{Deserialize, Serialize};

use crate::types::Rating;

/// Local feedback record for one conversation.
///
/// The rating is set optimistically when the user clicks; `sent` flips to
/// true only once the backend acknowledges receipt, and is the sole gate
/// enforcing at-most-one accepted submission per conversation. A failed
/// send leaves the optimistic rating in place with `sent` still false, so
/// a retry remains possible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackState {
    /// The backend conversation this record tracks.
    pub conversation_id: u64,

    /// The locally chosen rating, if any.
    pub rating: Option<Rating>,

    /// True once the backend has acknowledged the feedback.
    pub sent: bool,
}

impl FeedbackState {
    /// Create a fresh, unsent record for a conversation.
    pub fn new(conversation_id: u64) -> Self {
        Self {
            conversation_id,
            rating: None,
            sent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unsent_and_unrated() {
        let state = FeedbackState::new(42);
        assert_eq!(state.conversation_id, 42);
        assert!(state.rating.is_none());
        assert!(!state.sent);
    }
}
