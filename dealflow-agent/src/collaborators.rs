use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dealflow_offer::Offer;
use serde::{Deserialize, Serialize};

/// Failures at the I/O seams around the decision core. The orchestrator
/// logs and degrades on these rather than aborting a cycle.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Rate limited by {0}")]
    RateLimited(String),

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Promotional copy generated for one selected offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoContent {
    pub offer_id: String,
    pub headline: String,
    pub body: String,
    pub hashtags: Vec<String>,
    /// Filled in once a landing page exists for the offer.
    pub landing_url: Option<String>,
}

/// Acknowledgement from a social platform that a post went out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReceipt {
    pub platform: String,
    pub post_id: String,
    pub posted_at: DateTime<Utc>,
}

/// An upstream affiliate network. Implementations normalize their wire
/// format into [`Offer`] before it crosses this boundary; the engine never
/// sees network-specific shapes.
#[async_trait]
pub trait OfferSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_offers(&self, limit: usize) -> Result<Vec<Offer>, CollaboratorError>;
}

/// Produces promotional copy for a selected offer.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, offer: &Offer) -> Result<PromoContent, CollaboratorError>;
}

/// Hosts a landing page per promoted offer and returns its public URL.
#[async_trait]
pub trait LandingPageHost: Send + Sync {
    async fn create_page(
        &self,
        offer: &Offer,
        content: &PromoContent,
    ) -> Result<String, CollaboratorError>;
}

/// A social platform the agent posts to.
#[async_trait]
pub trait SocialPublisher: Send + Sync {
    fn platform(&self) -> &str;

    async fn publish(&self, content: &PromoContent) -> Result<PostReceipt, CollaboratorError>;
}
