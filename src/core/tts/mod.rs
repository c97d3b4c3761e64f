//! Text-to-speech backends.
//!
//! Two synthesizers are supported: the ElevenLabs HTTP API (remote, keyed)
//! and a local VOICEVOX engine (two-step query-then-synthesize protocol).
//! Both implement [`Synthesizer`]; preference and fallback ordering live in
//! [`crate::core::speech`].

mod base;
mod elevenlabs;
mod voicevox;

pub use base::{AudioData, AudioSink, SpeechError, SpeechResult, Synthesizer};
pub use elevenlabs::{ElevenLabsSynthesizer, VoiceSettings};
pub use voicevox::{VoicevoxSynthesizer, speakers};
