//! Feature Vector - the 29 anonymized transaction attributes
//!
//! Built fresh from the raw input text on every submit. The whole vector is
//! rejected if any single token is bad; there is no partial vector.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of features the prediction model expects
pub const FEATURE_COUNT: usize = 29;

/// Longest accepted input text, in characters
pub const MAX_INPUT_LEN: u64 = 4096;

/// Separator between features in the input text
pub const FEATURE_SEPARATOR: char = ',';

/// Ordered feature values. Index = feature position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Create from raw values
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Parse comma separated input text.
    ///
    /// Each token is trimmed and must be a finite number. The token count is
    /// checked before any token is parsed, so `"a,b"` reports a count error.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = input.split(FEATURE_SEPARATOR).map(str::trim).collect();

        if tokens.len() != FEATURE_COUNT {
            return Err(ValidationError::WrongCount {
                expected: FEATURE_COUNT,
                found: tokens.len(),
            });
        }

        let mut values = [0.0f64; FEATURE_COUNT];
        for (index, token) in tokens.into_iter().enumerate() {
            values[index] = parse_token(index, token)?;
        }

        Ok(Self(values))
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

fn parse_token(index: usize, token: &str) -> Result<f64, ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::EmptyToken { index });
    }

    // NaN and infinities have no JSON encoding
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            index,
            token: token.to_string(),
        }),
    }
}
