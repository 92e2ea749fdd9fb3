use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::SummaryTaskRepository;
use crate::application::services::SummaryMessage;

#[derive(Clone)]
pub struct SummaryState {
    pub task_repository: Arc<dyn SummaryTaskRepository>,
    pub summary_sender: mpsc::Sender<SummaryMessage>,
    pub api_token: Arc<str>,
}
