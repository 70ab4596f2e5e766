//! Health check handler
//!
//! Reports this server's own state only. The prediction service is not
//! contacted.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    /// Host of the configured prediction endpoint, `None` if the URL has none
    predict_host: Option<String>,
    /// Request timeout in seconds, `None` when requests wait indefinitely
    predict_timeout_secs: Option<u64>,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let predict_host = reqwest::Url::parse(state.predictor.predict_url())
        .ok()
        .and_then(|url| url.host_str().map(str::to_string));

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        predict_host,
        predict_timeout_secs: state.config.predict_timeout.map(|t| t.as_secs()),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
