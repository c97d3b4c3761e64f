use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::core::tts::Synthesizer;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Request body for the TTS endpoint
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
}

/// Handler for POST /api/tts
///
/// Proxies synthesis to ElevenLabs and returns the raw audio bytes. On any
/// provider failure the response is a 500; the kiosk then falls back to its
/// local speech engine.
pub async fn tts_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> AppResult<Response> {
    let text = request
        .text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::BadRequest("text is required".to_string()))?;

    info!("TTS request, text length: {}", text.chars().count());

    let tts = state.tts.as_ref().ok_or_else(|| {
        error!("TTS requested but no ElevenLabs API key is configured");
        AppError::InternalServerError("TTS generation failed".to_string())
    })?;

    let audio = tts.synthesize(text).await.map_err(|e| {
        error!("TTS synthesis error: {}", e);
        AppError::InternalServerError("TTS generation failed".to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, audio.mime)], audio.data).into_response())
}
