use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::SummaryTaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryTaskStatus {
    Queued,
    Transcribing,
    Summarizing,
    Delivering,
    Completed,
    Failed,
}

impl SummaryTaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryTaskStatus::Queued => "queued",
            SummaryTaskStatus::Transcribing => "transcribing",
            SummaryTaskStatus::Summarizing => "summarizing",
            SummaryTaskStatus::Delivering => "delivering",
            SummaryTaskStatus::Completed => "completed",
            SummaryTaskStatus::Failed => "failed",
        }
    }
}

impl FromStr for SummaryTaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(SummaryTaskStatus::Queued),
            "transcribing" => Ok(SummaryTaskStatus::Transcribing),
            "summarizing" => Ok(SummaryTaskStatus::Summarizing),
            "delivering" => Ok(SummaryTaskStatus::Delivering),
            "completed" => Ok(SummaryTaskStatus::Completed),
            "failed" => Ok(SummaryTaskStatus::Failed),
            _ => Err(format!("Invalid summary task status: {}", s)),
        }
    }
}

impl fmt::Display for SummaryTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One transcribe-then-summarize job for a recording file in object storage.
#[derive(Debug, Clone)]
pub struct SummaryTask {
    pub id: SummaryTaskId,
    pub filename: String,
    pub email: String,
    pub sub: String,
    pub status: SummaryTaskStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SummaryTask {
    pub fn new(filename: String, email: String, sub: String) -> Self {
        let now = Utc::now();
        Self {
            id: SummaryTaskId::new(),
            filename,
            email,
            sub,
            status: SummaryTaskStatus::Queued,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
