use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative counters for one offer. Counters only ever grow; the derived
/// rates are recomputed from the running totals after every update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

/// A partial batch of metric increments. Absent fields default to zero, so
/// callers report only what they observed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceUpdate {
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub conversions: u64,
    #[serde(default)]
    pub revenue: f64,
}

/// Per-offer performance history, keyed by the network-assigned offer id.
///
/// The table only grows (there is no eviction) and it is written only
/// through [`apply`](Self::apply). Scoring reads it, never mutates it.
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    records: HashMap<String, PerformanceRecord>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of increments into the offer's record, creating a
    /// zero-initialized record on first touch. Never fails; unknown ids are
    /// simply new rows.
    pub fn apply(&mut self, offer_id: &str, update: &PerformanceUpdate) {
        let record = self.records.entry(offer_id.to_string()).or_default();

        record.impressions += update.impressions;
        record.clicks += update.clicks;
        record.conversions += update.conversions;
        record.revenue += update.revenue;

        // Zero denominators leave the previous rate in place.
        if record.impressions > 0 {
            record.ctr = record.clicks as f64 / record.impressions as f64;
        }
        if record.clicks > 0 {
            record.conversion_rate = record.conversions as f64 / record.clicks as f64;
        }

        tracing::info!(offer_id, ctr = record.ctr, "Updated offer performance");
    }

    pub fn get(&self, offer_id: &str) -> Option<&PerformanceRecord> {
        self.records.get(offer_id)
    }

    /// Historical click-through rate used as a scoring boost; 0 for offers
    /// never seen.
    pub fn ctr(&self, offer_id: &str) -> f64 {
        self.records.get(offer_id).map_or(0.0, |r| r.ctr)
    }

    pub fn is_tracked(&self, offer_id: &str) -> bool {
        self.records.contains_key(offer_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_creates_record() {
        let mut tracker = PerformanceTracker::new();
        tracker.apply(
            "amz-1",
            &PerformanceUpdate {
                impressions: 100,
                clicks: 10,
                ..Default::default()
            },
        );

        let record = tracker.get("amz-1").unwrap();
        assert_eq!(record.impressions, 100);
        assert_eq!(record.clicks, 10);
        assert_eq!(record.ctr, 0.1);
        assert_eq!(record.conversion_rate, 0.0);
    }

    #[test]
    fn updates_accumulate_and_rates_recompute() {
        let mut tracker = PerformanceTracker::new();
        tracker.apply(
            "amz-1",
            &PerformanceUpdate {
                impressions: 100,
                clicks: 10,
                ..Default::default()
            },
        );
        tracker.apply(
            "amz-1",
            &PerformanceUpdate {
                clicks: 5,
                conversions: 3,
                ..Default::default()
            },
        );

        let record = tracker.get("amz-1").unwrap();
        assert_eq!(record.impressions, 100);
        assert_eq!(record.clicks, 15);
        assert_eq!(record.conversions, 3);
        assert_eq!(record.ctr, 0.15);
        assert_eq!(record.conversion_rate, 0.2);
    }

    #[test]
    fn split_updates_equal_one_combined_update() {
        let mut split = PerformanceTracker::new();
        split.apply("x", &PerformanceUpdate { clicks: 1, ..Default::default() });
        split.apply("x", &PerformanceUpdate { clicks: 1, ..Default::default() });

        let mut combined = PerformanceTracker::new();
        combined.apply("x", &PerformanceUpdate { clicks: 2, ..Default::default() });

        assert_eq!(split.get("x"), combined.get("x"));
    }

    #[test]
    fn zero_denominator_leaves_prior_rate() {
        let mut tracker = PerformanceTracker::new();
        tracker.apply(
            "x",
            &PerformanceUpdate {
                impressions: 200,
                clicks: 30,
                ..Default::default()
            },
        );
        assert_eq!(tracker.ctr("x"), 0.15);

        // Revenue-only update: no new impressions, ctr stays put.
        tracker.apply("x", &PerformanceUpdate { revenue: 9.5, ..Default::default() });
        assert_eq!(tracker.ctr("x"), 0.15);
        assert_eq!(tracker.get("x").unwrap().revenue, 9.5);
    }

    #[test]
    fn unknown_offer_has_zero_boost() {
        let tracker = PerformanceTracker::new();
        assert_eq!(tracker.ctr("never-seen"), 0.0);
        assert!(!tracker.is_tracked("never-seen"));
    }
}
