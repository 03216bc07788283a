use dealflow_shared::ApiCredential;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cycle: CycleSettings,
    #[serde(default)]
    pub filters: FilterThresholds,
    #[serde(default)]
    pub networks: NetworkCredentials,
    #[serde(default)]
    pub site: SiteSettings,
}

/// The four thresholds the decision engine reads. The engine is constructed
/// from this struct alone, never from the full `Config`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FilterThresholds {
    /// Minimum commission percentage an offer must pay.
    pub min_commission_rate: f64,
    /// Minimum discount percentage an offer must carry.
    pub min_discount_percent: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_commission_rate: 5.0,
            min_discount_percent: 15.0,
            min_price: 10.0,
            max_price: 500.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CycleSettings {
    /// How many offers each cycle promotes.
    pub posts_per_hour: usize,
    /// How many candidates to pull from the networks per cycle.
    pub offers_to_fetch: usize,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            posts_per_hour: 2,
            offers_to_fetch: 20,
        }
    }
}

/// Per-network API credentials. A source is only consulted when its
/// credential is configured.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NetworkCredentials {
    #[serde(default)]
    pub amazon_access_key: ApiCredential,
    #[serde(default)]
    pub amazon_secret_key: ApiCredential,
    #[serde(default)]
    pub amazon_partner_tag: ApiCredential,
    #[serde(default)]
    pub cj_api_key: ApiCredential,
    #[serde(default)]
    pub impact_api_key: ApiCredential,
    #[serde(default)]
    pub shopify_partner_id: ApiCredential,
    #[serde(default)]
    pub semrush_affiliate_id: ApiCredential,
    #[serde(default)]
    pub hubspot_affiliate_code: ApiCredential,
    #[serde(default)]
    pub hostinger_affiliate_id: ApiCredential,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    pub site_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: "https://yourdeals.example".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file; every key has a serde default so the
            // file itself is optional
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides (development, production, ...)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment, e.g.
            // `DEALFLOW__FILTERS__MIN_PRICE=25` or `DEALFLOW__NETWORKS__CJ_API_KEY=...`
            .add_source(config::Environment::with_prefix("DEALFLOW").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
