pub mod analytics;
pub mod app_config;

pub use analytics::{AnalyticsStore, AnalyticsSummary, DailyStats};
pub use app_config::{Config, FilterThresholds};
