//! Fraud check web server

use std::net::SocketAddr;

use fraudcheck_web::{config, create_router, logic::PredictionClient, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the log filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "fraudcheck_web=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env();

    tracing::info!("Fraud check server starting...");
    tracing::info!("Prediction endpoint: {}", config.predict_url);
    match config.predict_timeout {
        Some(timeout) => tracing::info!("Prediction timeout: {:?}", timeout),
        None => tracing::info!("Prediction timeout: none"),
    }

    let predictor = PredictionClient::new(config.predictor())?;

    // Build application state
    let state = AppState {
        predictor,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
