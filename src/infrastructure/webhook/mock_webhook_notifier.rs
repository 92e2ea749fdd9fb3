use tokio::sync::Mutex;

use crate::application::ports::{SummaryPayload, WebhookError, WebhookNotifier};

/// Records delivered payloads instead of sending them.
#[derive(Default)]
pub struct MockWebhookNotifier {
    delivered: Mutex<Vec<SummaryPayload>>,
}

impl MockWebhookNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn delivered(&self) -> Vec<SummaryPayload> {
        self.delivered.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl WebhookNotifier for MockWebhookNotifier {
    async fn notify(&self, payload: &SummaryPayload) -> Result<(), WebhookError> {
        self.delivered.lock().await.push(payload.clone());
        Ok(())
    }
}
