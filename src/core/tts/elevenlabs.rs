use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use super::base::{AudioData, SpeechError, SpeechResult, Synthesizer};
use crate::config::ServerConfig;

/// Voice settings for ElevenLabs TTS
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    /// Voice stability (0.0 to 1.0)
    pub stability: f32,
    /// Similarity boost (0.0 to 1.0)
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// ElevenLabs TTS client using the HTTP REST API.
///
/// Returns MP3 audio; the `/api/tts` handler proxies the bytes through
/// unchanged.
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    model: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsSynthesizer {
    /// Create a client from server configuration.
    ///
    /// Fails with `InvalidConfiguration` when no API key is configured.
    pub fn from_config(config: &ServerConfig) -> SpeechResult<Self> {
        let api_key = config
            .elevenlabs_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SpeechError::InvalidConfiguration(
                    "API key is required for ElevenLabs".to_string(),
                )
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .unwrap_or_default();

        Ok(Self {
            http,
            base_url: config.elevenlabs_base_url.trim_end_matches('/').to_string(),
            api_key,
            voice_id: config.elevenlabs_voice_id.clone(),
            model: config.elevenlabs_model.clone(),
            voice_settings: VoiceSettings::default(),
        })
    }

    fn synthesis_url(&self) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id)
    }
}

#[async_trait]
impl Synthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> SpeechResult<AudioData> {
        let body = json!({
            "text": text,
            "model_id": self.model,
            "voice_settings": self.voice_settings,
        });

        let response = self
            .http
            .post(self.synthesis_url())
            .header("xi-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("ElevenLabs error ({}): {}", status, detail);
            return Err(SpeechError::ProviderStatus(status.as_u16()));
        }

        let data = response.bytes().await?.to_vec();
        Ok(AudioData {
            data,
            mime: "audio/mpeg".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            spreadsheet_id: "sheet".to_string(),
            sheet_base_url: "https://docs.google.com".to_string(),
            elevenlabs_api_key: key.map(String::from),
            elevenlabs_voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            elevenlabs_model: "eleven_multilingual_v2".to_string(),
            elevenlabs_base_url: "https://api.elevenlabs.io/".to_string(),
            voicevox_url: "http://localhost:50021".to_string(),
            voicevox_speaker: 27,
            request_timeout_seconds: 5,
        }
    }

    #[test]
    fn requires_api_key() {
        assert!(matches!(
            ElevenLabsSynthesizer::from_config(&config_with_key(None)),
            Err(SpeechError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ElevenLabsSynthesizer::from_config(&config_with_key(Some(""))),
            Err(SpeechError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn builds_synthesis_url_from_voice_id() {
        let tts = ElevenLabsSynthesizer::from_config(&config_with_key(Some("test_key"))).unwrap();
        assert_eq!(
            tts.synthesis_url(),
            "https://api.elevenlabs.io/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"
        );
    }

    #[test]
    fn default_voice_settings_match_reception_tuning() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.stability, 0.5);
        assert_eq!(settings.similarity_boost, 0.75);
    }
}
