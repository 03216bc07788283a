use dealflow_api::{app, AppState};
use dealflow_offer::DecisionEngine;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealflow_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = dealflow_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting dealflow API on port {}", config.server.port);
    tracing::info!(thresholds = ?config.filters, "Engine thresholds");

    let engine = DecisionEngine::new(config.filters.clone());
    let app_state = AppState::new(engine);

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
