    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn complete_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[\"Q1\"]")))
            .mount(&server)
            .await;

        let model = OpenAiChatModel::with_url(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
        );

        let reply = model.complete("Generate questions").await.unwrap();
        assert_eq!(reply, "[\"Q1\"]");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let model = OpenAiChatModel::with_url(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            server.uri(),
        );

        match model.complete("prompt").await {
            Err(ModelError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected API error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn missing_choices_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        let model = OpenAiChatModel::with_url(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            server.uri(),
        );

        assert!(matches!(
            model.complete("prompt").await,
            Err(ModelError::EmptyResponse)
        ));
    }
