use async_trait::async_trait;

use crate::domain::{SummaryTask, SummaryTaskId, SummaryTaskStatus};

use super::RepositoryError;

#[async_trait]
pub trait SummaryTaskRepository: Send + Sync {
    async fn create(&self, task: &SummaryTask) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: SummaryTaskId) -> Result<Option<SummaryTask>, RepositoryError>;

    async fn update_status(
        &self,
        id: SummaryTaskId,
        status: SummaryTaskStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError>;
}
