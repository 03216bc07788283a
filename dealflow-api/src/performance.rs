use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use dealflow_offer::{PerformanceRecord, PerformanceUpdate};
use dealflow_shared::models::events::PerformanceUpdatedEvent;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/v1/performance/{offer_id}",
        post(update_performance).get(get_performance),
    )
}

/// POST /v1/performance/{offer_id}
/// Fold reported metric increments into the offer's history. Unknown ids
/// start a fresh record; this endpoint never rejects a well-formed body.
async fn update_performance(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
    Json(update): Json<PerformanceUpdate>,
) -> StatusCode {
    let mut engine = state.engine.lock().await;
    engine.update_performance(&offer_id, &update);

    if let Some(record) = engine.performance(&offer_id) {
        let event = PerformanceUpdatedEvent {
            offer_id: offer_id.clone(),
            impressions: record.impressions,
            clicks: record.clicks,
            conversions: record.conversions,
            ctr: record.ctr,
            timestamp: Utc::now().timestamp(),
        };
        tracing::info!(event = ?event, "Performance updated");
    }

    StatusCode::NO_CONTENT
}

/// GET /v1/performance/{offer_id}
async fn get_performance(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<PerformanceRecord>, AppError> {
    let engine = state.engine.lock().await;
    engine
        .performance(&offer_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("No performance history for {}", offer_id)))
}
