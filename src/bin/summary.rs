use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use meet::application::ports::SummaryTaskRepository;
use meet::application::services::SummaryWorker;
use meet::infrastructure::audio::OpenAiWhisperEngine;
use meet::infrastructure::llm::OpenAiClient;
use meet::infrastructure::observability::{TracingConfig, init_tracing};
use meet::infrastructure::persistence::InMemorySummaryTaskRepository;
use meet::infrastructure::storage::MinioRecordingStore;
use meet::infrastructure::webhook::HttpWebhookNotifier;
use meet::presentation::{SummaryState, create_summary_router, get_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&TracingConfig::default(), "summary")?;

    let settings = match get_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid summary worker configuration");
            return Err(e.into());
        }
    };

    tracing::info!(settings = ?settings, "Summary worker configuration loaded");

    let recording_store = Arc::new(MinioRecordingStore::new(
        &settings.minio_url,
        &settings.minio_bucket,
        &settings.minio_access_key,
        &settings.minio_secret_key,
    )?);
    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai_api_key.clone(),
        settings.openai_base_url.clone(),
        settings.openai_asr_model.clone(),
    ));
    let llm_client = Arc::new(OpenAiClient::new(
        settings.openai_api_key.clone(),
        settings.openai_base_url.clone(),
        settings.openai_llm_model.clone(),
    ));
    let webhook_notifier = Arc::new(HttpWebhookNotifier::new(
        settings.webhook_url.clone(),
        settings.webhook_api_token.clone(),
        settings.retry_policy(),
    ));
    let task_repository: Arc<dyn SummaryTaskRepository> =
        Arc::new(InMemorySummaryTaskRepository::new());

    let (summary_sender, summary_receiver) = mpsc::channel(settings.summary_queue_capacity);

    let worker = SummaryWorker::new(
        summary_receiver,
        recording_store,
        transcription_engine,
        llm_client,
        webhook_notifier,
        Arc::clone(&task_repository),
    );
    tokio::spawn(worker.run());

    let state = SummaryState {
        task_repository,
        summary_sender,
        api_token: Arc::from(settings.app_api_token.as_str()),
    };

    let router = create_summary_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server_port));
    tracing::info!(app_name = %settings.app_name, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
