use async_trait::async_trait;

/// Synthesized audio ready for playback or proxying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    /// Encoded audio bytes.
    pub data: Vec<u8>,
    /// MIME type of `data` (e.g. "audio/mpeg", "audio/wav").
    pub mime: String,
}

/// Speech-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("provider returned status {0}")]
    ProviderStatus(u16),

    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("playback failed: {0}")]
    Playback(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        SpeechError::RequestFailed(err.to_string())
    }
}

/// Result type for speech operations
pub type SpeechResult<T> = Result<T, SpeechError>;

/// A text-to-speech backend.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` into a complete audio payload.
    async fn synthesize(&self, text: &str) -> SpeechResult<AudioData>;
}

/// Audio output device.
///
/// `play` resolves only once playback has finished, not when the audio has
/// merely been queued. The interaction state machine relies on that ordering
/// to gate input on "currently speaking".
#[async_trait]
pub trait AudioSink: Send + Sync {
    async fn play(&self, audio: AudioData) -> SpeechResult<()>;
}
