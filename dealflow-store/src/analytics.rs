use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Rollup of one calendar day of promotion activity.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DailyStats {
    pub posts: u64,
    pub offers: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
}

/// How often and when an offer has been promoted.
#[derive(Debug, Clone, Serialize)]
pub struct OfferPromotionStats {
    pub times_promoted: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub first_promoted: NaiveDate,
    pub last_promoted: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub total_revenue: f64,
    pub total_commission: f64,
    pub posts_published: u64,
    pub offers_promoted: usize,
}

/// In-memory account of clicks, conversions, and revenue across cycles.
///
/// Tracks three levels at once: lifetime totals, per-day rollups, and
/// per-offer promotion history.
#[derive(Debug, Default)]
pub struct AnalyticsStore {
    total_clicks: u64,
    total_conversions: u64,
    total_revenue: f64,
    total_commission: f64,
    posts_published: u64,
    daily: BTreeMap<NaiveDate, DailyStats>,
    offers: HashMap<String, OfferPromotionStats>,
}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one promotion cycle.
    pub fn record_cycle(&mut self, offer_ids: &[String], posts: usize) {
        self.record_cycle_on(Utc::now().date_naive(), offer_ids, posts);
    }

    pub fn record_cycle_on(&mut self, day: NaiveDate, offer_ids: &[String], posts: usize) {
        let stats = self.daily.entry(day).or_default();
        stats.posts += posts as u64;
        stats.offers += offer_ids.len() as u64;
        self.posts_published += posts as u64;

        for offer_id in offer_ids {
            let entry = self
                .offers
                .entry(offer_id.clone())
                .or_insert_with(|| OfferPromotionStats {
                    times_promoted: 0,
                    clicks: 0,
                    conversions: 0,
                    revenue: 0.0,
                    first_promoted: day,
                    last_promoted: day,
                });
            entry.times_promoted += 1;
            entry.last_promoted = day;
        }

        tracing::info!(day = %day, offers = offer_ids.len(), posts, "Recorded cycle metrics");
    }

    /// Record a click-through on an affiliate link.
    pub fn track_click(&mut self, offer_id: &str, source: &str) {
        self.track_click_on(Utc::now().date_naive(), offer_id, source);
    }

    pub fn track_click_on(&mut self, day: NaiveDate, offer_id: &str, source: &str) {
        self.total_clicks += 1;
        self.daily.entry(day).or_default().clicks += 1;
        if let Some(entry) = self.offers.get_mut(offer_id) {
            entry.clicks += 1;
        }
        tracing::info!(offer_id, source, "Tracked click");
    }

    /// Record a conversion and the commission it earned.
    pub fn track_conversion(&mut self, offer_id: &str, commission: f64) {
        self.track_conversion_on(Utc::now().date_naive(), offer_id, commission);
    }

    pub fn track_conversion_on(&mut self, day: NaiveDate, offer_id: &str, commission: f64) {
        self.total_conversions += 1;
        self.total_commission += commission;
        self.total_revenue += commission;

        let stats = self.daily.entry(day).or_default();
        stats.conversions += 1;
        stats.revenue += commission;

        if let Some(entry) = self.offers.get_mut(offer_id) {
            entry.conversions += 1;
            entry.revenue += commission;
        }
        tracing::info!(offer_id, commission, "Tracked conversion");
    }

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            total_clicks: self.total_clicks,
            total_conversions: self.total_conversions,
            total_revenue: self.total_revenue,
            total_commission: self.total_commission,
            posts_published: self.posts_published,
            offers_promoted: self.offers.len(),
        }
    }

    pub fn daily_stats(&self, day: NaiveDate) -> Option<&DailyStats> {
        self.daily.get(&day)
    }

    pub fn offer_stats(&self, offer_id: &str) -> Option<&OfferPromotionStats> {
        self.offers.get(offer_id)
    }
}
