//! Verdict model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Last verdict shown by the form.
///
/// `Unset` until the first successful prediction; never goes back to `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    #[default]
    Unset,
    Fraud,
    Legitimate,
}

impl Verdict {
    pub fn from_fraud_flag(fraud: bool) -> Self {
        if fraud {
            Verdict::Fraud
        } else {
            Verdict::Legitimate
        }
    }

    pub fn is_fraud(&self) -> bool {
        *self == Verdict::Fraud
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Unset => "unset",
            Verdict::Fraud => "fraud",
            Verdict::Legitimate => "legitimate",
        }
    }

    /// Display text, `None` when nothing should be shown
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Verdict::Unset => None,
            Verdict::Fraud => Some("Fraudulent Transaction"),
            Verdict::Legitimate => Some("Legitimate Transaction"),
        }
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "unset" => Ok(Verdict::Unset),
            "fraud" => Ok(Verdict::Fraud),
            "legitimate" => Ok(Verdict::Legitimate),
            other => Err(format!("unknown verdict: {}", other)),
        }
    }
}
