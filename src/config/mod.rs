//! Configuration module for the receptionist server
//!
//! Configuration is loaded from environment variables (with a `.env` file
//! picked up via dotenvy when present). Every value has a sensible default so
//! the kiosk can run against the shared spreadsheet and a local VOICEVOX
//! engine without any setup; only the ElevenLabs key is genuinely optional.
//!
//! # Example
//! ```rust,no_run
//! use uketsuke::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

mod env;

/// Server configuration
///
/// Contains all configuration needed to run the receptionist server:
/// - Server settings (host, port)
/// - Reservation sheet source (spreadsheet id, export base URL)
/// - ElevenLabs TTS settings (API key, voice, model)
/// - VOICEVOX engine settings (URL, speaker id)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Reservation sheet source
    pub spreadsheet_id: String,
    /// Base URL of the spreadsheet export service. Overridable so tests can
    /// point the adapter at a mock server.
    pub sheet_base_url: String,

    // ElevenLabs TTS settings
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: String,
    pub elevenlabs_model: String,
    pub elevenlabs_base_url: String,

    // VOICEVOX engine settings
    pub voicevox_url: String,
    pub voicevox_speaker: u32,

    // Upstream HTTP timeout
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
