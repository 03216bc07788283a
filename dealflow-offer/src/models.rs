use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "General".to_string()
}

/// A normalized affiliate offer. Upstream network adapters produce this
/// shape before the engine ever sees an offer; the engine never branches on
/// where an offer came from.
///
/// `id` is assigned by the source network and stays stable across cycles;
/// it is the key the performance history is accumulated under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: String,
    pub network: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default)]
    pub commission_amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub merchant: String,
    #[serde(default)]
    pub affiliate_url: String,
    #[serde(default)]
    pub deep_link: Option<String>,
    /// Star rating in [0, 5]; 0 when the network reports none.
    #[serde(default)]
    pub rating: f64,
    /// Review count; 0 when the network reports none.
    #[serde(default)]
    pub reviews: u32,
}

impl Offer {
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn has_affiliate_url(&self) -> bool {
        !self.affiliate_url.is_empty()
    }
}

/// Per-component score breakdown, kept alongside the total for logging and
/// debugging. Components are recorded before the trending and history
/// multipliers are applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreComponents {
    pub commission: f64,
    pub discount: f64,
    pub social_proof: f64,
    pub price_appeal: f64,
}

/// An offer paired with its computed score. Transient: scores never leave
/// the engine boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOffer {
    pub offer: Offer,
    pub score: f64,
    pub components: ScoreComponents,
}
