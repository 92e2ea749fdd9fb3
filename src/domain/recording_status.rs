use std::fmt;
use std::str::FromStr;

/// Lifecycle of a recording.
///
/// `Initiated` and `Active` are the ongoing states; at most one recording per
/// room may be in either of them. Every other state is terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordingStatus {
    #[default]
    Initiated,
    Active,
    Stopped,
    Aborted,
    Saved,
    FailedToStart,
    FailedToStop,
}

impl RecordingStatus {
    pub const ONGOING: [RecordingStatus; 2] = [RecordingStatus::Active, RecordingStatus::Initiated];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingStatus::Initiated => "initiated",
            RecordingStatus::Active => "active",
            RecordingStatus::Stopped => "stopped",
            RecordingStatus::Aborted => "aborted",
            RecordingStatus::Saved => "saved",
            RecordingStatus::FailedToStart => "failed_to_start",
            RecordingStatus::FailedToStop => "failed_to_stop",
        }
    }

    pub fn is_ongoing(&self) -> bool {
        Self::ONGOING.contains(self)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_ongoing()
    }

    pub fn can_transition_to(&self, next: RecordingStatus) -> bool {
        use RecordingStatus::*;

        matches!(
            (self, next),
            (Initiated, Active)
                | (Initiated, FailedToStart)
                | (Active, Stopped)
                | (Active, Aborted)
                | (Active, Saved)
                | (Active, FailedToStart)
                | (Active, FailedToStop)
        )
    }
}

impl FromStr for RecordingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initiated" => Ok(RecordingStatus::Initiated),
            "active" => Ok(RecordingStatus::Active),
            "stopped" => Ok(RecordingStatus::Stopped),
            "aborted" => Ok(RecordingStatus::Aborted),
            "saved" => Ok(RecordingStatus::Saved),
            "failed_to_start" => Ok(RecordingStatus::FailedToStart),
            "failed_to_stop" => Ok(RecordingStatus::FailedToStop),
            _ => Err(format!("Invalid recording status: {}", s)),
        }
    }
}

impl fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
