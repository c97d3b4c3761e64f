use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, reservation, tts};
use crate::state::AppState;
use std::sync::Arc;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(api::health_check))
        .route("/api/reservation", get(reservation::reservation_handler))
        .route("/api/tts", post(tts::tts_handler))
        .layer(TraceLayer::new_for_http())
}
