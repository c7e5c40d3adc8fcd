//! Integration tests for the liaison library.
//! These tests require a running backend named in the environment.

#[cfg(test)]
mod tests {
    use liaison::{Rating, Session, SupportClient};

    fn backend_url() -> Option<String> {
        std::env::var("LIAISON_BASE_URL").ok()
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        // This test requires LIAISON_BASE_URL to be set
        let Some(base_url) = backend_url() else {
            eprintln!("Skipping test: LIAISON_BASE_URL not set");
            return;
        };

        let client = SupportClient::new(&base_url).expect("Failed to create client");
        let reply = client.chat("How do I reset my password?").await;
        assert!(reply.is_ok(), "Request should succeed against live backend");

        let reply = reply.unwrap();
        assert!(!reply.text().is_empty());
        if reply.is_success() {
            assert!(reply.conversation_id.is_some());
        }
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let Some(base_url) = backend_url() else {
            eprintln!("Skipping test: LIAISON_BASE_URL not set");
            return;
        };

        let client = SupportClient::new(&base_url).expect("Failed to create client");
        let stats = client.stats().await;
        assert!(stats.is_ok(), "Stats request should succeed");
        assert!(stats.unwrap().online);
    }

    #[tokio::test]
    async fn test_dashboard_report() {
        let Some(base_url) = backend_url() else {
            eprintln!("Skipping test: LIAISON_BASE_URL not set");
            return;
        };

        let client = SupportClient::new(&base_url).expect("Failed to create client");
        let report = client.dashboard().await;
        assert!(report.is_ok(), "Dashboard request should succeed");

        let report = report.unwrap();
        assert_eq!(
            report.queries_by_date.labels.len(),
            report.queries_by_date.data.len()
        );
    }

    #[tokio::test]
    async fn test_session_turn_and_feedback() {
        let Some(base_url) = backend_url() else {
            eprintln!("Skipping test: LIAISON_BASE_URL not set");
            return;
        };

        let client = SupportClient::new(&base_url).expect("Failed to create client");
        let mut session = Session::new(client);
        session.submit_message("hello").await;
        assert_eq!(session.message_count(), 2);

        if let Some(conversation_id) = session.last_conversation_id() {
            session.submit_feedback(conversation_id, Rating::Up).await;
            let state = session
                .feedback_for(conversation_id)
                .expect("Feedback state should be recorded");
            assert_eq!(state.rating, Some(Rating::Up));
        }
    }
}
