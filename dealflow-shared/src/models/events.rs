use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OfferSelectedEvent {
    pub offer_id: String,
    pub network: String,
    pub category: String,
    pub selection_id: Uuid,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PerformanceUpdatedEvent {
    pub offer_id: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CycleCompletedEvent {
    pub cycle_id: Uuid,
    pub offers_fetched: usize,
    pub offers_selected: usize,
    pub posts_published: usize,
    pub timestamp: i64,
}
