use async_trait::async_trait;

/// Turns a meeting transcript into a summary for the recipient.
///
/// Callers never pass an empty transcript.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("summary request failed: {0}")]
    ApiRequestFailed(String),
    #[error("summary request rate limited")]
    RateLimited,
    #[error("unexpected summary response: {0}")]
    InvalidResponse(String),
}
