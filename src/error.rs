//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown to the user when the input is not 29 comma separated numbers
pub const VALIDATION_MESSAGE: &str = "Please enter exactly 29 numerical features separated by commas.";

/// Shown to the user when the prediction service could not be reached or understood
pub const TRANSPORT_MESSAGE: &str = "Failed to get prediction.";

/// Rejected feature input. Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} features, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("feature {index} is empty")]
    EmptyToken { index: usize },

    #[error("feature {index} is not a number: {token:?}")]
    NotANumber { index: usize, token: String },
}

/// Any failure talking to the prediction service.
///
/// Status codes, timeouts and connection failures are kept apart for the logs
/// only; the user sees the same message for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("prediction service returned status {0}")]
    Status(u16),

    #[error("malformed prediction response: {0}")]
    Malformed(String),
}

/// Outcome of a failed form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Fixed user-facing message for this kind of failure
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => VALIDATION_MESSAGE,
            SubmitError::Transport(_) => TRANSPORT_MESSAGE,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Validation errors
    ValidationError(String),

    // External service errors
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ExternalServiceError(msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, TRANSPORT_MESSAGE)
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Validation(e) => {
                AppError::ValidationError(format!("{} ({})", VALIDATION_MESSAGE, e))
            }
            SubmitError::Transport(e) => AppError::ExternalServiceError(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_messages_are_fixed() {
        let validation: SubmitError = ValidationError::WrongCount { expected: 29, found: 28 }.into();
        let transport: SubmitError = TransportError::Status(503).into();

        assert_eq!(validation.user_message(), VALIDATION_MESSAGE);
        assert_eq!(transport.user_message(), TRANSPORT_MESSAGE);
    }

    #[test]
    fn test_app_error_status_codes() {
        let bad_input = AppError::from(SubmitError::from(ValidationError::EmptyToken { index: 3 }));
        assert_eq!(bad_input.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::from(SubmitError::from(TransportError::Network("refused".into())));
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
