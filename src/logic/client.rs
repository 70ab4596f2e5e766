//! Prediction API Client
//!
//! HTTP client for the remote fraud prediction service.

use std::future::Future;
use std::time::Duration;

use crate::error::TransportError;
use crate::models::{FeatureVector, PredictRequest, PredictResponse, Verdict};

/// Anything that can turn a feature vector into a verdict.
///
/// The form only talks to this trait, so tests can count calls without a
/// network.
pub trait Predictor {
    fn predict(
        &self,
        features: &FeatureVector,
    ) -> impl Future<Output = Result<Verdict, TransportError>> + Send;
}

/// Prediction service configuration
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub predict_url: String,
    /// `None` waits for the service indefinitely
    pub timeout: Option<Duration>,
}

/// Prediction API client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    config: PredictorConfig,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new prediction client
    pub fn new(config: PredictorConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            http_client: builder.build()?,
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.config.predict_url
    }
}

impl Predictor for PredictionClient {
    async fn predict(&self, features: &FeatureVector) -> Result<Verdict, TransportError> {
        let request = PredictRequest { features };

        tracing::debug!("Requesting prediction from {}", self.config.predict_url);

        let response = self.http_client
            .post(&self.config.predict_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!("Prediction failed ({}): {}", status, error_text);
            return Err(TransportError::Status(status));
        }

        let result: PredictResponse = response.json().await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;

        Ok(result.verdict())
    }
}
