use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use dealflow_offer::PerformanceUpdate;
use dealflow_store::AnalyticsSummary;
use serde::Deserialize;

use crate::state::AppState;

fn default_source() -> String {
    "direct".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ClickEvent {
    pub offer_id: String,
    #[serde(default = "default_source")]
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversionEvent {
    pub offer_id: String,
    #[serde(default)]
    pub commission: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/track/click", post(track_click))
        .route("/v1/track/conversion", post(track_conversion))
        .route("/v1/analytics/summary", get(summary))
}

/// POST /v1/track/click
/// A click-through on a published affiliate link. Feeds both the analytics
/// rollups and the engine's performance history, so well-clicked offers
/// rank higher in later cycles.
async fn track_click(State(state): State<AppState>, Json(event): Json<ClickEvent>) -> StatusCode {
    {
        let mut analytics = state.analytics.lock().await;
        analytics.track_click(&event.offer_id, &event.source);
    }

    let mut engine = state.engine.lock().await;
    engine.update_performance(
        &event.offer_id,
        &PerformanceUpdate {
            clicks: 1,
            ..Default::default()
        },
    );

    StatusCode::NO_CONTENT
}

/// POST /v1/track/conversion
async fn track_conversion(
    State(state): State<AppState>,
    Json(event): Json<ConversionEvent>,
) -> StatusCode {
    {
        let mut analytics = state.analytics.lock().await;
        analytics.track_conversion(&event.offer_id, event.commission);
    }

    let mut engine = state.engine.lock().await;
    engine.update_performance(
        &event.offer_id,
        &PerformanceUpdate {
            conversions: 1,
            revenue: event.commission,
            ..Default::default()
        },
    );

    StatusCode::NO_CONTENT
}

/// GET /v1/analytics/summary
async fn summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    let analytics = state.analytics.lock().await;
    Json(analytics.summary())
}
