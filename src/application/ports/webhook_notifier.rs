use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPayload {
    pub title: String,
    pub content: String,
    pub email: String,
    pub sub: String,
}

#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    async fn notify(&self, payload: &SummaryPayload) -> Result<(), WebhookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook request failed after {attempts} attempt(s): {reason}")]
    DeliveryFailed { attempts: u32, reason: String },
    #[error("webhook rejected payload with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
