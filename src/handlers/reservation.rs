use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::core::lookup::{LookupError, LookupResult};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the reservation endpoint
#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    pub name: Option<String>,
}

/// Handler for GET /api/reservation
///
/// Looks up the first reservation whose visitor name contains the given
/// fragment. Responds `{found: false}` both when nothing matches and when
/// the sheet is unreachable.
pub async fn reservation_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Value>> {
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;

    info!("Search request for: {}", name);

    let result = state.reservations.lookup(name).await.map_err(|e| match e {
        LookupError::InvalidArgument => AppError::BadRequest("name is required".to_string()),
    })?;

    let body = match result {
        LookupResult::Found(record) => json!({
            "found": true,
            "visitorName": record.visitor_name(),
            "company": record.company(),
            "staff": record.staff(),
            "department": record.department(),
            "phone": record.phone(),
            "note": record.note(),
        }),
        LookupResult::NotFound => json!({ "found": false }),
    };

    Ok(Json(body))
}
