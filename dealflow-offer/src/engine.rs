use crate::filters::OfferFilter;
use crate::models::Offer;
use crate::performance::{PerformanceRecord, PerformanceTracker, PerformanceUpdate};
use crate::scoring;
use crate::selection;
use dealflow_store::FilterThresholds;

/// Offer decision engine: hard filters, weighted scoring, and
/// diversity-constrained top-K selection, with a performance feedback loop
/// that biases future scoring toward offers that earned clicks.
///
/// The engine is synchronous and does no locking of its own; callers that
/// share it across tasks wrap it in a mutex (selection reads the history
/// table, updates write it).
pub struct DecisionEngine {
    filter: OfferFilter,
    performance: PerformanceTracker,
}

impl DecisionEngine {
    pub fn new(thresholds: FilterThresholds) -> Self {
        Self {
            filter: OfferFilter::new(thresholds),
            performance: PerformanceTracker::new(),
        }
    }

    /// Filter and rank candidates, returning up to `count` offers to
    /// promote. Deterministic for a given candidate list, configuration,
    /// and history snapshot. An empty result means no offer met the bar and
    /// the caller skips the cycle.
    pub fn select_best_offers(&self, offers: &[Offer], count: usize) -> Vec<Offer> {
        let filtered = self.filter.apply(offers);
        tracing::info!("After filtering: {} offers remain", filtered.len());

        if filtered.is_empty() {
            return Vec::new();
        }

        let scored = scoring::score_offers(&filtered, &self.performance);
        let selected = selection::select_diverse(&scored, count);

        tracing::info!("Selected {} offers for promotion", selected.len());
        selected
    }

    /// Fold reported metrics into the offer's history. Unknown ids create a
    /// fresh record; the call never fails.
    pub fn update_performance(&mut self, offer_id: &str, update: &PerformanceUpdate) {
        self.performance.apply(offer_id, update);
    }

    pub fn performance(&self, offer_id: &str) -> Option<&PerformanceRecord> {
        self.performance.get(offer_id)
    }

    pub fn thresholds(&self) -> &FilterThresholds {
        self.filter.thresholds()
    }
}
