//! Prediction service wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FeatureVector, Verdict};

/// Outbound body: `{"features": [..29 numbers..]}`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a FeatureVector,
}

/// Response body. Only `fraud` is read; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub fraud: Option<Value>,
}

impl PredictResponse {
    /// `1` or `true` is fraud. Anything else, including a missing or null
    /// field, is legitimate.
    pub fn verdict(&self) -> Verdict {
        let fraud = match &self.fraud {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64() == Some(1.0),
            _ => false,
        };
        Verdict::from_fraud_flag(fraud)
    }
}
