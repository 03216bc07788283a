use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use dealflow_offer::Offer;
use dealflow_shared::models::events::OfferSelectedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectOffersRequest {
    /// Candidate offers, already normalized by the caller's network adapters.
    pub offers: Vec<Offer>,
    /// How many to promote this cycle.
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SelectOffersResponse {
    pub selected: Vec<Offer>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/offers/select", post(select_offers))
}

/// POST /v1/offers/select
/// Run the decision engine over a candidate batch. An empty `selected` list
/// is a normal response, not an error; the caller skips its cycle.
async fn select_offers(
    State(state): State<AppState>,
    Json(req): Json<SelectOffersRequest>,
) -> Json<SelectOffersResponse> {
    tracing::info!(candidates = req.offers.len(), count = req.count, "Selection requested");

    let selected = {
        let engine = state.engine.lock().await;
        engine.select_best_offers(&req.offers, req.count)
    };

    let selection_id = Uuid::new_v4();
    for offer in &selected {
        let event = OfferSelectedEvent {
            offer_id: offer.id.clone(),
            network: offer.network.clone(),
            category: offer.category.clone(),
            selection_id,
            timestamp: Utc::now().timestamp(),
        };
        tracing::info!(event = ?event, "Offer selected");
    }

    Json(SelectOffersResponse { selected })
}
