use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("model returned no choices")]
    EmptyResponse,
}

/// Chat-completion capability. Constructed once at process start and passed
/// by reference; there is no global model state.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ApiMessage,
}

/// Client for any OpenAI-compatible chat-completions endpoint.
pub struct OpenAiChatModel {
    api_key: String,
    api_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiChatModel {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_url(api_key, model, DEFAULT_API_URL.to_string())
    }

    pub fn with_url(api_key: String, model: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let request = ApiRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(0.7),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api { status, message });
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ModelError::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
