use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use meet::application::ports::{
    LlmClient, SummaryPayload, SummaryTaskRepository, TranscriptionEngine, TranscriptionError,
    WebhookError, WebhookNotifier,
};
use meet::application::services::{
    EMPTY_TRANSCRIPT_SUMMARY, SummaryMessage, SummaryWorker, SummaryWorkerError, summary_title,
};
use meet::domain::{SummaryTask, SummaryTaskStatus};
use meet::infrastructure::audio::MockTranscriptionEngine;
use meet::infrastructure::llm::MockLlmClient;
use meet::infrastructure::persistence::InMemorySummaryTaskRepository;
use meet::infrastructure::storage::MockRecordingStore;
use meet::infrastructure::webhook::MockWebhookNotifier;

const RECORDING_KEY: &str = "recordings/standup-2024-05-01.ogg";

struct RejectingWebhook;

#[async_trait::async_trait]
impl WebhookNotifier for RejectingWebhook {
    async fn notify(&self, _payload: &SummaryPayload) -> Result<(), WebhookError> {
        Err(WebhookError::Rejected {
            status: 400,
            body: "bad payload".to_string(),
        })
    }
}

#[derive(Default)]
struct CountingTranscriptionEngine {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl TranscriptionEngine for CountingTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _filename: &str,
    ) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("should not be used".to_string())
    }
}

struct Fixture {
    worker: SummaryWorker,
    task_repository: Arc<InMemorySummaryTaskRepository>,
    task: SummaryTask,
}

async fn fixture(
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    webhook_notifier: Arc<dyn WebhookNotifier>,
) -> Fixture {
    let store = MockRecordingStore::new().with_object(RECORDING_KEY, vec![0u8; 64]);
    fixture_with_store(store, transcription_engine, llm_client, webhook_notifier).await
}

async fn fixture_with_store(
    store: MockRecordingStore,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    webhook_notifier: Arc<dyn WebhookNotifier>,
) -> Fixture {
    let task_repository = Arc::new(InMemorySummaryTaskRepository::new());
    let (_sender, receiver) = mpsc::channel(1);

    let task = SummaryTask::new(
        RECORDING_KEY.to_string(),
        "alice@example.com".to_string(),
        "sub-alice".to_string(),
    );
    task_repository.create(&task).await.unwrap();

    let worker = SummaryWorker::new(
        receiver,
        Arc::new(store),
        transcription_engine,
        llm_client,
        webhook_notifier,
        task_repository.clone() as Arc<dyn SummaryTaskRepository>,
    );

    Fixture {
        worker,
        task_repository,
        task,
    }
}

fn message_for(task: &SummaryTask, filename: &str) -> SummaryMessage {
    SummaryMessage {
        task_id: task.id,
        filename: filename.to_string(),
        email: task.email.clone(),
        sub: task.sub.clone(),
    }
}

#[tokio::test]
async fn given_recording_when_processing_then_summary_is_delivered() {
    let webhook = Arc::new(MockWebhookNotifier::new());
    let f = fixture(
        Arc::new(MockTranscriptionEngine::new("hello everyone")),
        Arc::new(MockLlmClient::new()),
        webhook.clone(),
    )
    .await;

    f.worker
        .process_task(message_for(&f.task, RECORDING_KEY))
        .await
        .unwrap();

    let delivered = webhook.delivered().await;
    assert_eq!(
        delivered,
        vec![SummaryPayload {
            title: "Meeting summary: standup-2024-05-01".to_string(),
            content: "Summary of 14 characters".to_string(),
            email: "alice@example.com".to_string(),
            sub: "sub-alice".to_string(),
        }]
    );

    let task = f.task_repository.get_by_id(f.task.id).await.unwrap().unwrap();
    assert_eq!(task.status, SummaryTaskStatus::Completed);
    assert!(task.error_message.is_none());
}

#[tokio::test]
async fn given_empty_transcript_when_processing_then_llm_is_skipped() {
    let webhook = Arc::new(MockWebhookNotifier::new());
    let llm = Arc::new(MockLlmClient::new());
    let f = fixture(
        Arc::new(MockTranscriptionEngine::new("   ")),
        llm.clone(),
        webhook.clone(),
    )
    .await;

    f.worker
        .process_task(message_for(&f.task, RECORDING_KEY))
        .await
        .unwrap();

    let delivered = webhook.delivered().await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].content, EMPTY_TRANSCRIPT_SUMMARY);
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn given_zero_byte_object_when_processing_then_transcription_is_skipped() {
    let webhook = Arc::new(MockWebhookNotifier::new());
    let llm = Arc::new(MockLlmClient::new());
    let engine = Arc::new(CountingTranscriptionEngine::default());
    let f = fixture_with_store(
        MockRecordingStore::new().with_object(RECORDING_KEY, Vec::new()),
        engine.clone(),
        llm.clone(),
        webhook.clone(),
    )
    .await;

    f.worker
        .process_task(message_for(&f.task, RECORDING_KEY))
        .await
        .unwrap();

    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    assert_eq!(llm.calls(), 0);
    let delivered = webhook.delivered().await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].content, EMPTY_TRANSCRIPT_SUMMARY);
    let task = f.task_repository.get_by_id(f.task.id).await.unwrap().unwrap();
    assert_eq!(task.status, SummaryTaskStatus::Completed);
}

#[tokio::test]
async fn given_missing_object_when_processing_then_task_fails_without_delivery() {
    let webhook = Arc::new(MockWebhookNotifier::new());
    let f = fixture(
        Arc::new(MockTranscriptionEngine::new("hello")),
        Arc::new(MockLlmClient::new()),
        webhook.clone(),
    )
    .await;

    let result = f
        .worker
        .process_task(message_for(&f.task, "recordings/missing.ogg"))
        .await;

    assert!(matches!(result, Err(SummaryWorkerError::Storage(_))));
    assert!(webhook.delivered().await.is_empty());

    let task = f.task_repository.get_by_id(f.task.id).await.unwrap().unwrap();
    assert_eq!(task.status, SummaryTaskStatus::Failed);
    assert!(task.error_message.unwrap().contains("recordings/missing.ogg"));
}

#[tokio::test]
async fn given_rejecting_webhook_when_processing_then_task_fails() {
    let f = fixture(
        Arc::new(MockTranscriptionEngine::new("hello")),
        Arc::new(MockLlmClient::new()),
        Arc::new(RejectingWebhook),
    )
    .await;

    let result = f
        .worker
        .process_task(message_for(&f.task, RECORDING_KEY))
        .await;

    assert!(matches!(
        result,
        Err(SummaryWorkerError::Webhook(WebhookError::Rejected { status: 400, .. }))
    ));
    let task = f.task_repository.get_by_id(f.task.id).await.unwrap().unwrap();
    assert_eq!(task.status, SummaryTaskStatus::Failed);
}

#[tokio::test]
async fn given_queued_message_when_worker_runs_then_task_completes() {
    let webhook = Arc::new(MockWebhookNotifier::new());
    let task_repository = Arc::new(InMemorySummaryTaskRepository::new());
    let (sender, receiver) = mpsc::channel(4);

    let worker = SummaryWorker::new(
        receiver,
        Arc::new(MockRecordingStore::new().with_object(RECORDING_KEY, vec![1, 2, 3])),
        Arc::new(MockTranscriptionEngine::new("status update")),
        Arc::new(MockLlmClient::new()),
        webhook.clone(),
        task_repository.clone() as Arc<dyn SummaryTaskRepository>,
    );

    let task = SummaryTask::new(
        RECORDING_KEY.to_string(),
        "bob@example.com".to_string(),
        "sub-bob".to_string(),
    );
    task_repository.create(&task).await.unwrap();
    sender.send(message_for(&task, RECORDING_KEY)).await.unwrap();
    drop(sender);

    worker.run().await;

    let stored = task_repository.get_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(stored.status, SummaryTaskStatus::Completed);
    assert_eq!(webhook.delivered().await.len(), 1);
}

#[test]
fn given_object_key_when_building_title_then_uses_file_stem() {
    assert_eq!(summary_title("a/b/weekly.mp4"), "Meeting summary: weekly");
    assert_eq!(summary_title("no_extension"), "Meeting summary: no_extension");
    assert_eq!(summary_title("folder/.ogg"), "Meeting summary");
}
