use crate::models::{Offer, ScoreComponents, ScoredOffer};
use crate::performance::PerformanceTracker;

/// Categories that currently convert well and earn a 10% score boost.
pub const TRENDING_CATEGORIES: [&str; 4] = ["Electronics", "Smart Home", "Fitness", "Kitchen"];

const TRENDING_MULTIPLIER: f64 = 1.1;

/// Score every offer and return them sorted best-first.
///
/// The total is a weighted sum of four components, then two multiplicative
/// adjustments: the trending-category bonus and the historical CTR boost.
/// The sort is stable, so equal scores keep their candidate order; there
/// is deliberately no further tie-break.
pub fn score_offers(offers: &[Offer], history: &PerformanceTracker) -> Vec<ScoredOffer> {
    let mut scored: Vec<ScoredOffer> = offers
        .iter()
        .map(|offer| score_offer(offer, history))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

fn score_offer(offer: &Offer, history: &PerformanceTracker) -> ScoredOffer {
    // Expected commission carries the largest weight.
    let commission = offer.commission_amount * 0.4;

    // Deeper discounts pull more buyers.
    let discount = (offer.discount_percent / 100.0) * 25.0;

    // Rating quality and review volume, each capped at 10.
    let rating_score = (offer.rating / 5.0) * 10.0;
    let review_score = (offer.reviews as f64 / 1000.0).min(1.0) * 10.0;
    let social_proof = rating_score + review_score;

    let price_appeal = price_appeal_score(offer.price);

    let mut score = commission + discount + social_proof + price_appeal;

    if TRENDING_CATEGORIES.contains(&offer.category.as_str()) {
        score *= TRENDING_MULTIPLIER;
    }

    // Offers that earned clicks before get promoted again sooner.
    if history.is_tracked(&offer.id) {
        score *= 1.0 + history.ctr(&offer.id);
    }

    ScoredOffer {
        offer: offer.clone(),
        score,
        components: ScoreComponents {
            commission,
            discount,
            social_proof,
            price_appeal,
        },
    }
}

/// Mid-range prices convert best; the tiers fall off on both sides.
fn price_appeal_score(price: f64) -> f64 {
    if (50.0..=200.0).contains(&price) {
        15.0
    } else if (20.0..50.0).contains(&price) || (price > 200.0 && price <= 350.0) {
        10.0
    } else {
        5.0
    }
}
