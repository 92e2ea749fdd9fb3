use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{
    LlmClient, LlmClientError, RecordingStore, RecordingStoreError, RepositoryError,
    SummaryPayload, SummaryTaskRepository, TranscriptionEngine, TranscriptionError,
    WebhookError, WebhookNotifier,
};
use crate::domain::{SummaryTaskId, SummaryTaskStatus};

pub const EMPTY_TRANSCRIPT_SUMMARY: &str = "No audio content was detected in this recording.";

pub struct SummaryMessage {
    pub task_id: SummaryTaskId,
    pub filename: String,
    pub email: String,
    pub sub: String,
}

pub struct SummaryWorker {
    receiver: mpsc::Receiver<SummaryMessage>,
    recording_store: Arc<dyn RecordingStore>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    webhook_notifier: Arc<dyn WebhookNotifier>,
    task_repository: Arc<dyn SummaryTaskRepository>,
}

impl SummaryWorker {
    pub fn new(
        receiver: mpsc::Receiver<SummaryMessage>,
        recording_store: Arc<dyn RecordingStore>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        webhook_notifier: Arc<dyn WebhookNotifier>,
        task_repository: Arc<dyn SummaryTaskRepository>,
    ) -> Self {
        Self {
            receiver,
            recording_store,
            transcription_engine,
            llm_client,
            webhook_notifier,
            task_repository,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Summary worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "summary_task",
                task_id = %msg.task_id,
                filename = %msg.filename,
            );

            if let Err(e) = self.process_task(msg).instrument(span.clone()).await {
                let _guard = span.enter();
                tracing::error!(error = %e, "Summary task failed");
            }
        }
        tracing::info!("Summary worker stopped: channel closed");
    }

    pub async fn process_task(&self, msg: SummaryMessage) -> Result<(), SummaryWorkerError> {
        let task_id = msg.task_id;
        let result = self.process_pipeline(&msg).await;

        match &result {
            Ok(()) => {
                self.update_status(task_id, SummaryTaskStatus::Completed, None)
                    .await?;
                tracing::info!("Summary delivered");
            }
            Err(e) => {
                let error_msg = e.to_string();
                self.update_status(task_id, SummaryTaskStatus::Failed, Some(&error_msg))
                    .await?;
            }
        }

        result
    }

    async fn process_pipeline(&self, msg: &SummaryMessage) -> Result<(), SummaryWorkerError> {
        self.update_status(msg.task_id, SummaryTaskStatus::Transcribing, None)
            .await?;

        let size = self
            .recording_store
            .head(&msg.filename)
            .await
            .map_err(SummaryWorkerError::Storage)?;

        let transcript = if size == 0 {
            tracing::warn!("Empty recording object, skipping transcription");
            String::new()
        } else {
            let audio = self
                .recording_store
                .fetch(&msg.filename)
                .await
                .map_err(SummaryWorkerError::Storage)?;

            tracing::debug!(bytes = audio.len(), "Recording fetched from object storage");

            self.transcription_engine
                .transcribe(&audio, &msg.filename)
                .await
                .map_err(SummaryWorkerError::Transcription)?
        };

        self.update_status(msg.task_id, SummaryTaskStatus::Summarizing, None)
            .await?;

        let content = if transcript.trim().is_empty() {
            tracing::warn!("Empty transcript, skipping summarization");
            EMPTY_TRANSCRIPT_SUMMARY.to_string()
        } else {
            self.llm_client
                .summarize(&transcript)
                .await
                .map_err(SummaryWorkerError::Summarization)?
        };

        self.update_status(msg.task_id, SummaryTaskStatus::Delivering, None)
            .await?;

        let payload = SummaryPayload {
            title: summary_title(&msg.filename),
            content,
            email: msg.email.clone(),
            sub: msg.sub.clone(),
        };

        self.webhook_notifier
            .notify(&payload)
            .await
            .map_err(SummaryWorkerError::Webhook)
    }

    async fn update_status(
        &self,
        task_id: SummaryTaskId,
        status: SummaryTaskStatus,
        error_message: Option<&str>,
    ) -> Result<(), SummaryWorkerError> {
        tracing::debug!(status = %status, "Summary task status transition");
        self.task_repository
            .update_status(task_id, status, error_message)
            .await
            .map_err(SummaryWorkerError::Repository)
    }
}

/// Title shown to the recipient, derived from the object key.
pub fn summary_title(filename: &str) -> String {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
    if stem.is_empty() {
        "Meeting summary".to_string()
    } else {
        format!("Meeting summary: {}", stem)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryWorkerError {
    #[error("storage: {0}")]
    Storage(RecordingStoreError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("summarization: {0}")]
    Summarization(LlmClientError),
    #[error("webhook: {0}")]
    Webhook(WebhookError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
