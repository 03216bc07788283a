pub mod engine;
pub mod filters;
pub mod models;
pub mod performance;
pub mod scoring;
pub mod selection;

pub use engine::DecisionEngine;
pub use filters::OfferFilter;
pub use models::{Offer, ScoreComponents, ScoredOffer};
pub use performance::{PerformanceRecord, PerformanceTracker, PerformanceUpdate};
