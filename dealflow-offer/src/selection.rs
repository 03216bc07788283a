use crate::models::{Offer, ScoredOffer};
use std::collections::{HashMap, HashSet};

/// Greedy top-`count` pick over the score-sorted list, limiting repeats of
/// the same category and network.
///
/// Two constraints apply during the main pass:
/// - a category already picked is skipped until only one slot remains, so
///   the final slot goes to the best remaining scorer regardless of
///   category;
/// - no network may contribute `count / 2` or more selections. This cap is
///   never relaxed, which can leave slots unfilled even when eligible
///   offers remain; the backfill pass then tops up from the sorted list
///   ignoring diversity entirely.
pub fn select_diverse(scored: &[ScoredOffer], count: usize) -> Vec<Offer> {
    let mut selected: Vec<Offer> = Vec::new();
    let mut categories_used: HashSet<&str> = HashSet::new();
    let mut networks_used: HashMap<&str, usize> = HashMap::new();
    let network_cap = count / 2;

    for item in scored {
        if selected.len() >= count {
            break;
        }

        let offer = &item.offer;

        // Prefer distinct categories for all but the final slot.
        if selected.len() < count.saturating_sub(1)
            && categories_used.contains(offer.category.as_str())
        {
            continue;
        }

        if networks_used.get(offer.network.as_str()).copied().unwrap_or(0) >= network_cap {
            continue;
        }

        tracing::info!(
            offer_id = %offer.id,
            score = item.score,
            commission = offer.commission_amount,
            "Selected offer"
        );

        categories_used.insert(offer.category.as_str());
        *networks_used.entry(offer.network.as_str()).or_insert(0) += 1;
        selected.push(offer.clone());
    }

    // Diversity left slots open: fill with the best remaining scorers.
    if selected.len() < count {
        for item in scored {
            if selected.len() >= count {
                break;
            }
            if selected.iter().any(|picked| picked.id == item.offer.id) {
                continue;
            }
            selected.push(item.offer.clone());
        }
    }

    selected
}
