pub mod collaborators;
pub mod orchestrator;

pub use collaborators::{
    CollaboratorError, ContentGenerator, LandingPageHost, OfferSource, PostReceipt, PromoContent,
    SocialPublisher,
};
pub use orchestrator::{AgentError, AgentOrchestrator, AgentStats, CycleReport};
