//! JSON prediction handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;
use validator::Validate;

use crate::logic::FeatureSubmissionForm;
use crate::models::{FeatureVector, Verdict, MAX_INPUT_LEN};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct PredictInput {
    /// Raw comma separated feature text, exactly as a user would type it
    #[validate(length(max = MAX_INPUT_LEN))]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct PredictOutput {
    pub submission_id: Uuid,
    pub verdict: Verdict,
    pub fraud: bool,
    pub features: FeatureVector,
}

/// Validate raw input and forward it to the prediction service
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictInput>,
) -> AppResult<Json<PredictOutput>> {
    req.validate()?;

    // Errors come back as the return value; notices are not needed here
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut form = FeatureSubmissionForm::new(state.predictor.clone(), tx);
    form.on_input_change(req.input);

    let submission = form.on_submit().await?;

    Ok(Json(PredictOutput {
        submission_id: submission.id,
        verdict: submission.verdict,
        fraud: submission.verdict.is_fraud(),
        features: submission.features,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_limit_is_shared() {
        let max = MAX_INPUT_LEN as usize;

        assert!(PredictInput { input: ",".repeat(max) }.validate().is_ok());
        assert!(PredictInput { input: ",".repeat(max + 1) }.validate().is_err());
    }
}
