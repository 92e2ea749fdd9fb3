mod http_webhook_notifier;
mod mock_webhook_notifier;
mod retry_policy;

pub use http_webhook_notifier::HttpWebhookNotifier;
pub use mock_webhook_notifier::MockWebhookNotifier;
pub use retry_policy::RetryPolicy;
