//! Speech client with automatic fallback.
//!
//! Wraps a preferred [`Synthesizer`] and a fallback one behind a single
//! `speak(text)` call that never fails: synthesis or playback errors on the
//! preferred backend trigger the fallback, and a fallback failure is logged
//! and swallowed. The completion of `speak` means playback has ended, which
//! is what the interaction state machine keys `is_speaking` off.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::tts::{
    AudioData, AudioSink, ElevenLabsSynthesizer, SpeechResult, Synthesizer, VoicevoxSynthesizer,
};

/// Which synthesis backend the client should try first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceBackend {
    ElevenLabs,
    Voicevox,
}

/// Speech client configuration.
///
/// The voice selection is an explicit field here rather than process-wide
/// mutable state; it is decided once at construction.
#[derive(Debug, Clone, Copy)]
pub struct SpeechClientConfig {
    pub preferred: VoiceBackend,
}

impl Default for SpeechClientConfig {
    fn default() -> Self {
        Self {
            preferred: VoiceBackend::Voicevox,
        }
    }
}

/// Plays one utterance at a time, falling back when the preferred backend is
/// down. Callers are responsible for not overlapping calls; the kiosk state
/// machine enforces that through its speaking flag.
pub struct SpeechClient {
    primary: Arc<dyn Synthesizer>,
    fallback: Arc<dyn Synthesizer>,
    sink: Arc<dyn AudioSink>,
}

impl SpeechClient {
    pub fn new(
        primary: Arc<dyn Synthesizer>,
        fallback: Arc<dyn Synthesizer>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        Self {
            primary,
            fallback,
            sink,
        }
    }

    /// Build a client from the configured backends, probing VOICEVOX once.
    ///
    /// When the preferred backend is VOICEVOX but the engine is not running,
    /// ElevenLabs becomes the primary; the fallback synthesizer is attempted
    /// either way when the primary fails per-call.
    pub async fn select(
        config: SpeechClientConfig,
        voicevox: VoicevoxSynthesizer,
        elevenlabs: ElevenLabsSynthesizer,
        fallback: Arc<dyn Synthesizer>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        let primary: Arc<dyn Synthesizer> = match config.preferred {
            VoiceBackend::Voicevox if voicevox.is_running().await => Arc::new(voicevox),
            VoiceBackend::Voicevox => {
                tracing::warn!("VOICEVOX unavailable at startup, preferring ElevenLabs");
                Arc::new(elevenlabs)
            }
            VoiceBackend::ElevenLabs => Arc::new(elevenlabs),
        };

        Self::new(primary, fallback, sink)
    }

    /// Speak `text` aloud, resolving when playback ends.
    ///
    /// Never returns an error: the preferred backend is tried first, then the
    /// fallback; if both fail the utterance is dropped silently (logged).
    pub async fn speak(&self, text: &str) {
        let spoken = clean_speech_text(text);
        if spoken.is_empty() {
            return;
        }

        match self.render(self.primary.as_ref(), &spoken).await {
            Ok(()) => {}
            Err(e) => {
                tracing::warn!("Primary speech backend failed, falling back: {}", e);
                if let Err(e) = self.render(self.fallback.as_ref(), &spoken).await {
                    tracing::warn!("Fallback speech failed, dropping utterance: {}", e);
                }
            }
        }
    }

    async fn render(&self, synth: &dyn Synthesizer, text: &str) -> SpeechResult<()> {
        let audio = synth.synthesize(text).await?;
        self.sink.play(audio).await
    }
}

/// Strip display-only glyphs and line breaks before synthesis.
///
/// The phone glyph and newlines are visual annotations in the on-screen
/// message and must not be vocalized.
pub fn clean_speech_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == '📞' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sink that discards audio immediately.
///
/// Used in headless runs and tests where no audio device exists.
pub struct NullSink;

#[async_trait]
impl AudioSink for NullSink {
    async fn play(&self, _audio: AudioData) -> SpeechResult<()> {
        Ok(())
    }
}
