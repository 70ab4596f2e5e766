//! Configuration module

use std::env;
use std::time::Duration;

use crate::logic::PredictorConfig;

/// Default prediction endpoint
pub const DEFAULT_PREDICT_URL: &str = "https://creditcardfraudapi.onrender.com/predict";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prediction service URL
    pub predict_url: String,

    /// Server port
    pub port: u16,

    /// Prediction request timeout. Unset means wait forever.
    pub predict_timeout: Option<Duration>,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            predict_url: lookup("PREDICT_URL")
                .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string()),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            predict_timeout: lookup("PREDICT_TIMEOUT_SECS")
                .and_then(|t| t.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),

            environment: lookup("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn predictor(&self) -> PredictorConfig {
        PredictorConfig {
            predict_url: self.predict_url.clone(),
            timeout: self.predict_timeout,
        }
    }
}
