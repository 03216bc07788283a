use crate::models::Offer;
use dealflow_store::FilterThresholds;

/// Quality floor applied regardless of configured thresholds.
pub const MIN_RATING: f64 = 4.0;
pub const MIN_REVIEWS: u32 = 50;

/// Hard filter stage. Every condition must hold; there is no partial
/// credit, and survivor order matches candidate order.
pub struct OfferFilter {
    thresholds: FilterThresholds,
}

impl OfferFilter {
    pub fn new(thresholds: FilterThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &FilterThresholds {
        &self.thresholds
    }

    /// Retain only offers that pass every business rule. An empty result is
    /// a normal outcome the caller handles by skipping the cycle.
    pub fn apply(&self, offers: &[Offer]) -> Vec<Offer> {
        offers
            .iter()
            .filter(|offer| self.passes(offer))
            .cloned()
            .collect()
    }

    fn passes(&self, offer: &Offer) -> bool {
        if offer.commission_rate < self.thresholds.min_commission_rate {
            tracing::debug!(offer_id = %offer.id, commission_rate = offer.commission_rate, "Rejected: commission below minimum");
            return false;
        }

        if offer.discount_percent < self.thresholds.min_discount_percent {
            tracing::debug!(offer_id = %offer.id, discount = offer.discount_percent, "Rejected: discount below minimum");
            return false;
        }

        if offer.price < self.thresholds.min_price || offer.price > self.thresholds.max_price {
            tracing::debug!(offer_id = %offer.id, price = offer.price, "Rejected: price outside range");
            return false;
        }

        if !offer.has_image() {
            tracing::debug!(offer_id = %offer.id, "Rejected: missing image");
            return false;
        }

        if !offer.has_affiliate_url() {
            tracing::debug!(offer_id = %offer.id, "Rejected: missing affiliate URL");
            return false;
        }

        if offer.rating < MIN_RATING || offer.reviews < MIN_REVIEWS {
            tracing::debug!(offer_id = %offer.id, rating = offer.rating, reviews = offer.reviews, "Rejected: weak social proof");
            return false;
        }

        true
    }
}
