#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The row changed since it was read; the write was not applied.
    #[error("conflicting update: {0}")]
    Conflict(String),
    /// Carries the name of the violated constraint when the backend reports it.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

impl RepositoryError {
    pub fn is_violation_of(&self, constraint: &str) -> bool {
        matches!(self, RepositoryError::ConstraintViolation(name) if name == constraint)
    }
}
