use async_trait::async_trait;
use reqwest::Client;

use super::RetryPolicy;
use crate::application::ports::{SummaryPayload, WebhookError, WebhookNotifier};

pub struct HttpWebhookNotifier {
    client: Client,
    url: String,
    api_token: String,
    retry_policy: RetryPolicy,
}

impl HttpWebhookNotifier {
    pub fn new(url: String, api_token: String, retry_policy: RetryPolicy) -> Self {
        Self {
            client: Client::new(),
            url,
            api_token,
            retry_policy,
        }
    }
}

#[async_trait]
impl WebhookNotifier for HttpWebhookNotifier {
    #[tracing::instrument(skip(self, payload), fields(url = %self.url))]
    async fn notify(&self, payload: &SummaryPayload) -> Result<(), WebhookError> {
        let max_attempts = self.retry_policy.max_attempts();
        let mut last_failure = String::new();

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                let delay = self.retry_policy.backoff(attempt - 1);
                tracing::warn!(
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    reason = %last_failure,
                    "Retrying webhook delivery"
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.url)
                .bearer_auth(&self.api_token)
                .json(payload)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    tracing::info!(attempt = attempt, status = %resp.status(), "Webhook delivered");
                    return Ok(());
                }
                Ok(resp) if self.retry_policy.should_retry_status(resp.status().as_u16()) => {
                    last_failure = format!("status {}", resp.status());
                }
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    let body = resp.text().await.unwrap_or_default();
                    tracing::error!(status = status, "Webhook rejected payload");
                    return Err(WebhookError::Rejected { status, body });
                }
                Err(e) => {
                    last_failure = format!("request: {}", e);
                }
            }
        }

        Err(WebhookError::DeliveryFailed {
            attempts: max_attempts,
            reason: last_failure,
        })
    }
}
