use async_trait::async_trait;
use log::warn;

use crate::{DeliveryOutcome, Notifier};

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

/// Posts `{from, to, subject, html}` to an HTTP mail API with bearer auth.
/// Missing configuration is not an error: the notifier is constructed
/// disabled and every send is skipped.
pub struct HttpMailNotifier {
    config: Option<MailConfig>,
    client: reqwest::Client,
}

impl HttpMailNotifier {
    pub fn new(config: Option<MailConfig>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Notifier for HttpMailNotifier {
    async fn send(&self, to: &str, subject: &str, html: &str) -> DeliveryOutcome {
        let Some(config) = &self.config else {
            return DeliveryOutcome::Skipped("mail transport not configured".to_string());
        };

        let payload = serde_json::json!({
            "from": config.from,
            "to": to,
            "subject": subject,
            "html": html,
        });

        match self
            .client
            .post(&config.api_url)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                let body: serde_json::Value = response.json().await.unwrap_or_default();
                let message_id = body
                    .get("id")
                    .and_then(|id| id.as_str())
                    .map(|id| id.to_string());
                DeliveryOutcome::Delivered(message_id)
            }
            Ok(response) => {
                let reason = format!("mail API error: {}", response.status());
                warn!("Delivery to {} failed: {}", to, reason);
                DeliveryOutcome::Failed(reason)
            }
            Err(err) => {
                warn!("Delivery to {} failed: {}", to, err);
                DeliveryOutcome::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "mailer_tests.rs"]
mod tests;
