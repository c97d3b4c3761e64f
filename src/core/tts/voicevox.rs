use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::base::{AudioData, SpeechError, SpeechResult, Synthesizer};

/// Known VOICEVOX speaker ids.
///
/// The full list is served by the engine at `GET /speakers`; these are the
/// voices the reception desk actually uses.
pub mod speakers {
    /// ずんだもん（ノーマル）
    pub const ZUNDAMON_NORMAL: u32 = 3;
    /// ずんだもん（セクシー）
    pub const ZUNDAMON_SEXY: u32 = 5;
    /// 四国めたん（ノーマル）
    pub const METAN_NORMAL: u32 = 2;
    /// 四国めたん（セクシー）
    pub const METAN_SEXY: u32 = 4;
    /// 春日部つむぎ
    pub const TSUMUGI: u32 = 8;
    /// 波音リツ
    pub const RITSU: u32 = 9;
    /// 冥鳴ひまり
    pub const HIMARI: u32 = 14;
    /// No.7
    pub const NO7: u32 = 29;
    /// 青山龍星
    pub const RYUSEI: u32 = 13;
    /// 後鬼（人間ver.）
    pub const GOKI: u32 = 27;
}

/// Client for a local VOICEVOX engine.
///
/// Synthesis is a two-step protocol: `POST /audio_query` builds a synthesis
/// query from the text, then `POST /synthesis` renders it to WAV. The engine
/// listens on localhost:50021 when the VOICEVOX app is running.
#[derive(Debug, Clone)]
pub struct VoicevoxSynthesizer {
    http: reqwest::Client,
    base_url: String,
    speaker: u32,
}

impl VoicevoxSynthesizer {
    pub fn new(base_url: &str, speaker: u32) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            speaker,
        }
    }

    pub fn speaker(&self) -> u32 {
        self.speaker
    }

    /// Engine version string, used as the startup availability probe.
    pub async fn version(&self) -> SpeechResult<String> {
        let response = self
            .http
            .get(format!("{}/version", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SpeechError::EngineUnavailable(format!(
                "version probe returned {}",
                response.status()
            )));
        }
        Ok(response.text().await?)
    }

    /// Whether a VOICEVOX engine is reachable.
    pub async fn is_running(&self) -> bool {
        match self.version().await {
            Ok(version) => {
                tracing::info!("VOICEVOX version: {}", version.trim());
                true
            }
            Err(_) => {
                tracing::warn!("VOICEVOX is not running");
                false
            }
        }
    }

    /// List the speakers the engine has installed.
    pub async fn list_speakers(&self) -> SpeechResult<Value> {
        let response = self
            .http
            .get(format!("{}/speakers", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SpeechError::ProviderStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl Synthesizer for VoicevoxSynthesizer {
    async fn synthesize(&self, text: &str) -> SpeechResult<AudioData> {
        let speaker = self.speaker.to_string();

        // Step 1: build the synthesis query from the text.
        let query_response = self
            .http
            .post(format!("{}/audio_query", self.base_url))
            .query(&[("text", text), ("speaker", speaker.as_str())])
            .send()
            .await?;
        if !query_response.status().is_success() {
            return Err(SpeechError::ProviderStatus(
                query_response.status().as_u16(),
            ));
        }
        let query: Value = query_response.json().await?;

        // Step 2: render the query to audio.
        let synthesis_response = self
            .http
            .post(format!("{}/synthesis", self.base_url))
            .query(&[("speaker", speaker.as_str())])
            .json(&query)
            .send()
            .await?;
        if !synthesis_response.status().is_success() {
            return Err(SpeechError::ProviderStatus(
                synthesis_response.status().as_u16(),
            ));
        }

        let data = synthesis_response.bytes().await?.to_vec();
        Ok(AudioData {
            data,
            mime: "audio/wav".to_string(),
        })
    }
}
