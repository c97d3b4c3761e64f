use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::lookup::LookupService;
use crate::core::sheet::SheetClient;
use crate::core::tts::ElevenLabsSynthesizer;

/// Application state that can be shared across handlers
pub struct AppState {
    pub config: ServerConfig,
    /// Reservation lookup over the live sheet
    pub reservations: LookupService,
    /// ElevenLabs client; None when no API key is configured, in which case
    /// `/api/tts` reports a synthesis failure and the kiosk falls back to
    /// local speech.
    pub tts: Option<ElevenLabsSynthesizer>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let sheet = SheetClient::new(&config);
        let reservations = LookupService::new(Arc::new(sheet));

        let tts = match ElevenLabsSynthesizer::from_config(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("ElevenLabs TTS disabled: {}", e);
                None
            }
        };

        Arc::new(Self {
            config,
            reservations,
            tts,
        })
    }
}
