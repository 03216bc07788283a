use crate::collaborators::{ContentGenerator, LandingPageHost, OfferSource, SocialPublisher};
use chrono::{DateTime, Utc};
use dealflow_offer::DecisionEngine;
use dealflow_shared::models::events::CycleCompletedEvent;
use dealflow_store::app_config::CycleSettings;
use dealflow_store::AnalyticsStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("No offer sources configured")]
    NoSources,

    #[error("No social publishers configured")]
    NoPublishers,
}

/// Running totals across the agent's lifetime.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentStats {
    pub cycles_run: u64,
    pub offers_processed: u64,
    pub posts_published: u64,
    pub publish_failures: u64,
    pub last_cycle_at: Option<DateTime<Utc>>,
}

/// Outcome of one cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub offers_fetched: usize,
    pub offers_selected: usize,
    pub posts_published: usize,
    /// True when no offer met the selection criteria and the cycle ended
    /// without promoting anything.
    pub skipped: bool,
}

/// Wires the collaborators around the decision engine and drives the
/// fetch → select → content → landing page → publish → record loop.
///
/// The engine and analytics store sit behind mutexes because performance
/// updates (clicks from a prior cycle's links) can arrive while a cycle is
/// selecting.
pub struct AgentOrchestrator {
    engine: Arc<Mutex<DecisionEngine>>,
    analytics: Arc<Mutex<AnalyticsStore>>,
    sources: Vec<Arc<dyn OfferSource>>,
    content: Arc<dyn ContentGenerator>,
    pages: Arc<dyn LandingPageHost>,
    publishers: Vec<Arc<dyn SocialPublisher>>,
    cycle_settings: CycleSettings,
    stats: AgentStats,
}

impl AgentOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        engine: Arc<Mutex<DecisionEngine>>,
        analytics: Arc<Mutex<AnalyticsStore>>,
        sources: Vec<Arc<dyn OfferSource>>,
        content: Arc<dyn ContentGenerator>,
        pages: Arc<dyn LandingPageHost>,
        publishers: Vec<Arc<dyn SocialPublisher>>,
        cycle_settings: CycleSettings,
    ) -> Result<Self, AgentError> {
        if sources.is_empty() {
            return Err(AgentError::NoSources);
        }
        if publishers.is_empty() {
            return Err(AgentError::NoPublishers);
        }
        Ok(Self {
            engine,
            analytics,
            sources,
            content,
            pages,
            publishers,
            cycle_settings,
            stats: AgentStats::default(),
        })
    }

    pub fn stats(&self) -> &AgentStats {
        &self.stats
    }

    /// Execute one promotion cycle. Collaborator failures degrade the cycle
    /// (logged and counted) instead of aborting it; an empty selection
    /// skips the cycle, which is a normal outcome.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let cycle_id = Uuid::new_v4();
        tracing::info!(%cycle_id, "Starting cycle #{}", self.stats.cycles_run + 1);

        // 1. Fetch candidates from every configured network.
        let offers = self.fetch_candidates().await;
        tracing::info!("Fetched {} offers", offers.len());
        self.stats.offers_processed += offers.len() as u64;

        // 2. Filter and rank.
        let selected = {
            let engine = self.engine.lock().await;
            engine.select_best_offers(&offers, self.cycle_settings.posts_per_hour)
        };

        if selected.is_empty() {
            tracing::warn!(%cycle_id, "No offers met criteria, skipping this cycle");
            self.stats.cycles_run += 1;
            self.stats.last_cycle_at = Some(Utc::now());
            return CycleReport {
                cycle_id,
                offers_fetched: offers.len(),
                offers_selected: 0,
                posts_published: 0,
                skipped: true,
            };
        }

        // 3-5. Content, landing pages, publishing.
        let mut posts_published = 0usize;
        for offer in &selected {
            let mut content = match self.content.generate(offer).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!(offer_id = %offer.id, error = %e, "Content generation failed");
                    continue;
                }
            };

            match self.pages.create_page(offer, &content).await {
                Ok(url) => content.landing_url = Some(url),
                Err(e) => {
                    tracing::warn!(offer_id = %offer.id, error = %e, "Landing page creation failed, posting direct link");
                }
            }

            for publisher in &self.publishers {
                match publisher.publish(&content).await {
                    Ok(receipt) => {
                        tracing::info!(
                            offer_id = %offer.id,
                            platform = receipt.platform,
                            post_id = receipt.post_id,
                            "Published post"
                        );
                        posts_published += 1;
                    }
                    Err(e) => {
                        tracing::error!(
                            offer_id = %offer.id,
                            platform = publisher.platform(),
                            error = %e,
                            "Publish failed"
                        );
                        self.stats.publish_failures += 1;
                    }
                }
            }
        }

        // 6. Record the cycle.
        let selected_ids: Vec<String> = selected.iter().map(|o| o.id.clone()).collect();
        {
            let mut analytics = self.analytics.lock().await;
            analytics.record_cycle(&selected_ids, posts_published);
        }

        self.stats.cycles_run += 1;
        self.stats.posts_published += posts_published as u64;
        self.stats.last_cycle_at = Some(Utc::now());

        let event = CycleCompletedEvent {
            cycle_id,
            offers_fetched: offers.len(),
            offers_selected: selected.len(),
            posts_published,
            timestamp: Utc::now().timestamp(),
        };
        tracing::info!(event = ?event, "Cycle complete");

        CycleReport {
            cycle_id,
            offers_fetched: offers.len(),
            offers_selected: selected.len(),
            posts_published,
            skipped: false,
        }
    }

    /// Pull candidates from every source, splitting the fetch budget and
    /// tolerating per-source failures.
    async fn fetch_candidates(&self) -> Vec<dealflow_offer::Offer> {
        let per_source = (self.cycle_settings.offers_to_fetch / self.sources.len()).max(3);
        let mut offers = Vec::new();

        for source in &self.sources {
            match source.fetch_offers(per_source).await {
                Ok(batch) => {
                    tracing::info!(source = source.name(), count = batch.len(), "Fetched offers");
                    offers.extend(batch);
                }
                Err(e) => {
                    tracing::error!(source = source.name(), error = %e, "Error fetching offers");
                }
            }
        }

        offers.truncate(self.cycle_settings.offers_to_fetch);
        offers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{CollaboratorError, PostReceipt, PromoContent};
    use async_trait::async_trait;
    use dealflow_offer::Offer;
    use dealflow_store::FilterThresholds;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn offer(id: &str, category: &str, network: &str) -> Offer {
        Offer {
            id: id.to_string(),
            network: network.to_string(),
            title: format!("{} deal", id),
            description: String::new(),
            image_url: "https://img/x.jpg".to_string(),
            price: 99.0,
            original_price: 140.0,
            discount_percent: 29.0,
            commission_rate: 7.0,
            commission_amount: 6.9,
            category: category.to_string(),
            merchant: "Acme".to_string(),
            affiliate_url: "https://aff/x".to_string(),
            deep_link: None,
            rating: 4.7,
            reviews: 800,
        }
    }

    struct StaticSource {
        name: String,
        offers: Vec<Offer>,
    }

    #[async_trait]
    impl OfferSource for StaticSource {
        fn name(&self) -> &str {
            &self.name
        }

        async fn fetch_offers(&self, _limit: usize) -> Result<Vec<Offer>, CollaboratorError> {
            Ok(self.offers.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl OfferSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_offers(&self, _limit: usize) -> Result<Vec<Offer>, CollaboratorError> {
            Err(CollaboratorError::Network("connection refused".into()))
        }
    }

    struct TemplateContent;

    #[async_trait]
    impl ContentGenerator for TemplateContent {
        async fn generate(&self, offer: &Offer) -> Result<PromoContent, CollaboratorError> {
            Ok(PromoContent {
                offer_id: offer.id.clone(),
                headline: format!("{} - {:.0}% off", offer.title, offer.discount_percent),
                body: offer.description.clone(),
                hashtags: vec!["#deals".to_string()],
                landing_url: None,
            })
        }
    }

    struct StaticPages;

    #[async_trait]
    impl LandingPageHost for StaticPages {
        async fn create_page(
            &self,
            offer: &Offer,
            _content: &PromoContent,
        ) -> Result<String, CollaboratorError> {
            Ok(format!("https://deals.example/p/{}", offer.id))
        }
    }

    struct CountingPublisher {
        published: AtomicUsize,
    }

    #[async_trait]
    impl SocialPublisher for CountingPublisher {
        fn platform(&self) -> &str {
            "twitter"
        }

        async fn publish(&self, content: &PromoContent) -> Result<PostReceipt, CollaboratorError> {
            assert!(content.landing_url.is_some(), "pages run before publishing");
            self.published.fetch_add(1, Ordering::SeqCst);
            Ok(PostReceipt {
                platform: "twitter".to_string(),
                post_id: format!("tw-{}", content.offer_id),
                posted_at: Utc::now(),
            })
        }
    }

    struct BrokenPublisher;

    #[async_trait]
    impl SocialPublisher for BrokenPublisher {
        fn platform(&self) -> &str {
            "mastodon"
        }

        async fn publish(&self, _content: &PromoContent) -> Result<PostReceipt, CollaboratorError> {
            Err(CollaboratorError::RateLimited("mastodon".into()))
        }
    }

    fn shared_engine() -> Arc<Mutex<DecisionEngine>> {
        Arc::new(Mutex::new(DecisionEngine::new(FilterThresholds::default())))
    }

    fn orchestrator(
        sources: Vec<Arc<dyn OfferSource>>,
        publishers: Vec<Arc<dyn SocialPublisher>>,
    ) -> AgentOrchestrator {
        AgentOrchestrator::new(
            shared_engine(),
            Arc::new(Mutex::new(AnalyticsStore::new())),
            sources,
            Arc::new(TemplateContent),
            Arc::new(StaticPages),
            publishers,
            CycleSettings {
                posts_per_hour: 2,
                offers_to_fetch: 20,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn full_cycle_selects_publishes_and_records() {
        let source = Arc::new(StaticSource {
            name: "amazon".to_string(),
            offers: vec![
                offer("a", "Electronics", "amazon"),
                offer("b", "Fitness", "cj"),
                offer("c", "Kitchen", "impact"),
            ],
        });
        let publisher = Arc::new(CountingPublisher {
            published: AtomicUsize::new(0),
        });

        let mut agent = orchestrator(vec![source], vec![publisher.clone()]);
        let report = agent.run_cycle().await;

        assert!(!report.skipped);
        assert_eq!(report.offers_fetched, 3);
        assert_eq!(report.offers_selected, 2);
        assert_eq!(report.posts_published, 2);
        assert_eq!(publisher.published.load(Ordering::SeqCst), 2);
        assert_eq!(agent.stats().cycles_run, 1);
        assert_eq!(agent.stats().posts_published, 2);

        let analytics = agent.analytics.lock().await;
        assert_eq!(analytics.summary().posts_published, 2);
        assert_eq!(analytics.summary().offers_promoted, 2);
    }

    #[tokio::test]
    async fn empty_selection_skips_cycle() {
        // Nothing survives the rating floor.
        let mut weak = offer("w", "Electronics", "amazon");
        weak.rating = 2.0;
        let source = Arc::new(StaticSource {
            name: "amazon".to_string(),
            offers: vec![weak],
        });
        let publisher = Arc::new(CountingPublisher {
            published: AtomicUsize::new(0),
        });

        let mut agent = orchestrator(vec![source], vec![publisher.clone()]);
        let report = agent.run_cycle().await;

        assert!(report.skipped);
        assert_eq!(report.posts_published, 0);
        assert_eq!(publisher.published.load(Ordering::SeqCst), 0);
        assert_eq!(agent.stats().cycles_run, 1);
    }

    #[tokio::test]
    async fn failing_source_and_publisher_degrade_not_abort() {
        let good = Arc::new(StaticSource {
            name: "cj".to_string(),
            offers: vec![offer("a", "Electronics", "cj"), offer("b", "Fitness", "amazon")],
        });
        let publisher = Arc::new(CountingPublisher {
            published: AtomicUsize::new(0),
        });

        let mut agent = orchestrator(
            vec![Arc::new(FailingSource), good],
            vec![publisher.clone(), Arc::new(BrokenPublisher)],
        );
        let report = agent.run_cycle().await;

        assert!(!report.skipped);
        assert_eq!(report.offers_selected, 2);
        // The healthy publisher posted both offers; the broken one failed both.
        assert_eq!(report.posts_published, 2);
        assert_eq!(agent.stats().publish_failures, 2);
    }

    #[test]
    fn construction_requires_collaborators() {
        let result = AgentOrchestrator::new(
            shared_engine(),
            Arc::new(Mutex::new(AnalyticsStore::new())),
            vec![],
            Arc::new(TemplateContent),
            Arc::new(StaticPages),
            vec![Arc::new(CountingPublisher {
                published: AtomicUsize::new(0),
            })],
            CycleSettings::default(),
        );
        assert!(matches!(result, Err(AgentError::NoSources)));
    }
}
