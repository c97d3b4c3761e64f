use std::env;

use super::ServerConfig;

/// Default export base for Google Sheets gviz queries.
const DEFAULT_SHEET_BASE_URL: &str = "https://docs.google.com";

/// The shared reception sheet used when no override is provided.
const DEFAULT_SPREADSHEET_ID: &str = "16cD8WO3FSox84dEvRCqOwiF2MaeQjZDOaYHQCXjx8a0";

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// # Errors
    /// Returns an error if a numeric variable (PORT, VOICEVOX_SPEAKER,
    /// REQUEST_TIMEOUT_SECONDS) is present but malformed.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        // Server configuration
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        // Reservation sheet source
        let spreadsheet_id =
            env::var("SPREADSHEET_ID").unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string());
        let sheet_base_url =
            env::var("SHEET_BASE_URL").unwrap_or_else(|_| DEFAULT_SHEET_BASE_URL.to_string());

        // ElevenLabs settings
        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").ok();
        let elevenlabs_voice_id = env::var("ELEVENLABS_VOICE_ID")
            .unwrap_or_else(|_| "21m00Tcm4TlvDq8ikWAM".to_string());
        let elevenlabs_model =
            env::var("ELEVENLABS_MODEL").unwrap_or_else(|_| "eleven_multilingual_v2".to_string());
        let elevenlabs_base_url = env::var("ELEVENLABS_BASE_URL")
            .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string());

        // VOICEVOX engine settings
        let voicevox_url =
            env::var("VOICEVOX_URL").unwrap_or_else(|_| "http://localhost:50021".to_string());
        let voicevox_speaker = env::var("VOICEVOX_SPEAKER")
            .unwrap_or_else(|_| "27".to_string())
            .parse::<u32>()
            .map_err(|e| format!("Invalid VOICEVOX speaker id: {e}"))?;

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|e| format!("Invalid request timeout: {e}"))?;

        Ok(ServerConfig {
            host,
            port,
            spreadsheet_id,
            sheet_base_url,
            elevenlabs_api_key,
            elevenlabs_voice_id,
            elevenlabs_model,
            elevenlabs_base_url,
            voicevox_url,
            voicevox_speaker,
            request_timeout_seconds,
        })
    }
}
