use std::fmt;
use std::str::FromStr;

/// Kind of worker a recording is delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingMode {
    ScreenRecording,
    Transcript,
}

impl RecordingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingMode::ScreenRecording => "screen_recording",
            RecordingMode::Transcript => "transcript",
        }
    }
}

impl FromStr for RecordingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screen_recording" => Ok(RecordingMode::ScreenRecording),
            "transcript" => Ok(RecordingMode::Transcript),
            _ => Err(format!("Invalid recording mode: {}", s)),
        }
    }
}

impl fmt::Display for RecordingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
