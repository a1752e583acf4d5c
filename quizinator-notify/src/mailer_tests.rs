    use super::*;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> MailConfig {
        MailConfig {
            api_url: server.uri(),
            api_key: "mail-key".to_string(),
            from: "reports@quizinator.test".to_string(),
        }
    }

    #[tokio::test]
    async fn unconfigured_notifier_skips_without_error() {
        let notifier = HttpMailNotifier::disabled();
        let outcome = notifier.send("a@x.com", "Subject", "<p>Hi</p>").await;
        assert!(matches!(outcome, DeliveryOutcome::Skipped(_)));
    }

    #[tokio::test]
    async fn successful_post_is_delivered_with_message_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("Authorization", "Bearer mail-key"))
            .and(body_partial_json(serde_json::json!({"to": "a@x.com"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-1"})),
            )
            .mount(&server)
            .await;

        let notifier = HttpMailNotifier::new(Some(config_for(&server)));
        let outcome = notifier.send("a@x.com", "Subject", "<p>Hi</p>").await;
        assert_eq!(outcome, DeliveryOutcome::Delivered(Some("msg-1".to_string())));
    }

    #[tokio::test]
    async fn api_rejection_is_a_failed_outcome_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier = HttpMailNotifier::new(Some(config_for(&server)));
        let outcome = notifier.send("a@x.com", "Subject", "<p>Hi</p>").await;
        assert!(matches!(outcome, DeliveryOutcome::Failed(_)));
    }
