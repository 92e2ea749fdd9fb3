use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Returns the same transcript for every input.
pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _filename: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}
