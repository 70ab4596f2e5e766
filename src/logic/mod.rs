//! Form logic and the prediction service client

pub mod client;
pub mod form;

pub use client::{PredictionClient, Predictor, PredictorConfig};
pub use form::{drain_notices, FeatureSubmissionForm, Notice, NoticeLevel, Submission};
