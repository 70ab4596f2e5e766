//! Credit Card Fraud Check
//!
//! A single form that takes 29 comma separated transaction features, checks
//! them, and asks a remote prediction service whether the transaction is
//! fraudulent.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     FRAUD CHECK WEB                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────────────┐   ┌───────────┐  │
//! │  │  Page /   │──▶│ FeatureSubmission  │──▶│ Prediction│──┼──▶ POST /predict
//! │  │  JSON API │   │ Form (validate)    │   │ Client    │  │
//! │  │  (Axum)   │◀──│ + notice channel   │◀──│ (reqwest) │◀─┼─── {"fraud": 0|1}
//! │  └───────────┘   └────────────────────┘   └───────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use logic::PredictionClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub predictor: PredictionClient,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/", get(handlers::page::show).post(handlers::page::submit))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
