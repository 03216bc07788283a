use dealflow_offer::DecisionEngine;
use dealflow_store::AnalyticsStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared service state. The engine and analytics store are mutex-guarded:
/// selection reads the performance table while tracking endpoints write it,
/// and the engine itself does no internal locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<DecisionEngine>>,
    pub analytics: Arc<Mutex<AnalyticsStore>>,
}

impl AppState {
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            analytics: Arc::new(Mutex::new(AnalyticsStore::new())),
        }
    }
}
