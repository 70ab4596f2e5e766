//! Feature Submission Form
//!
//! Owns the two pieces of UI state (input text, last verdict) and runs the
//! validate -> predict -> update protocol on submit.
//!
//! User-facing messages go out on a [`Notice`] channel instead of blocking
//! the caller. The host drains the receiver and displays whatever arrived.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::Instrument;
use uuid::Uuid;

use super::client::Predictor;
use crate::error::{SubmitError, TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
use crate::models::{FeatureVector, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Non-blocking user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    pub fn warning(message: &'static str) -> Self {
        Self { level: NoticeLevel::Warning, message }
    }

    pub fn error(message: &'static str) -> Self {
        Self { level: NoticeLevel::Error, message }
    }
}

/// Collect every notice currently queued without waiting
pub fn drain_notices(rx: &mut UnboundedReceiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}

/// A successful round trip
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub features: FeatureVector,
    pub verdict: Verdict,
}

pub struct FeatureSubmissionForm<P> {
    input: String,
    verdict: Verdict,
    predictor: P,
    notices: UnboundedSender<Notice>,
}

impl<P: Predictor> FeatureSubmissionForm<P> {
    /// Empty input, no verdict
    pub fn new(predictor: P, notices: UnboundedSender<Notice>) -> Self {
        Self::with_state(predictor, notices, String::new(), Verdict::Unset)
    }

    /// Resume a form from previously rendered state
    pub fn with_state(
        predictor: P,
        notices: UnboundedSender<Notice>,
        input: String,
        verdict: Verdict,
    ) -> Self {
        Self { input, verdict, predictor, notices }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Replace the input text verbatim. No validation happens here.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate the input and ask the predictor for a verdict.
    ///
    /// State changes only on success: the verdict is stored and the input is
    /// cleared. Every failure leaves both fields untouched and queues exactly
    /// one notice.
    pub async fn on_submit(&mut self) -> Result<Submission, SubmitError> {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("submit", submission_id = %id);

        async {
            let features = match FeatureVector::parse(&self.input) {
                Ok(features) => features,
                Err(err) => {
                    tracing::debug!("Rejected feature input: {}", err);
                    self.notify(Notice::warning(VALIDATION_MESSAGE));
                    return Err(SubmitError::from(err));
                }
            };

            match self.predictor.predict(&features).await {
                Ok(verdict) => {
                    tracing::info!("Prediction received: {}", verdict.as_str());
                    self.verdict = verdict;
                    self.input.clear();
                    Ok(Submission { id, features, verdict })
                }
                Err(err) => {
                    tracing::error!("Error: {}", err);
                    self.notify(Notice::error(TRANSPORT_MESSAGE));
                    Err(SubmitError::from(err))
                }
            }
        }
        .instrument(span)
        .await
    }

    fn notify(&self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            tracing::debug!("Notice dropped, no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, ValidationError};
    use crate::models::FEATURE_COUNT;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    /// Records every vector it is asked about and replies with a canned result
    #[derive(Clone)]
    struct MockPredictor {
        calls: Arc<Mutex<Vec<FeatureVector>>>,
        reply: Result<Verdict, TransportError>,
    }

    impl MockPredictor {
        fn replying(reply: Result<Verdict, TransportError>) -> Self {
            Self { calls: Arc::new(Mutex::new(Vec::new())), reply }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().len()
        }
    }

    impl Predictor for MockPredictor {
        async fn predict(&self, features: &FeatureVector) -> Result<Verdict, TransportError> {
            self.calls.lock().push(*features);
            self.reply.clone()
        }
    }

    fn numbered(count: usize) -> String {
        (0..count).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
    }

    fn form_with(
        mock: &MockPredictor,
    ) -> (FeatureSubmissionForm<MockPredictor>, UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (FeatureSubmissionForm::new(mock.clone(), tx), rx)
    }

    #[test]
    fn test_input_change_is_verbatim() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, mut rx) = form_with(&mock);

        form.on_input_change("  not, validated ,");
        assert_eq!(form.input(), "  not, validated ,");
        assert_eq!(form.verdict(), Verdict::Unset);
        assert!(drain_notices(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_wrong_count_makes_no_call() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, mut rx) = form_with(&mock);

        form.on_input_change(numbered(28));
        let result = form.on_submit().await;

        assert_eq!(
            result,
            Err(SubmitError::Validation(ValidationError::WrongCount { expected: 29, found: 28 }))
        );
        assert_eq!(mock.call_count(), 0);
        assert_eq!(form.input(), numbered(28));
        assert_eq!(form.verdict(), Verdict::Unset);
        assert_eq!(drain_notices(&mut rx), vec![Notice::warning(VALIDATION_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_bad_token_makes_no_call() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, mut rx) = form_with(&mock);

        for input in [
            format!("{},", numbered(28)),
            format!("{},x", numbered(28)),
            format!("abc,{}", numbered(28)),
        ] {
            form.on_input_change(input.clone());
            assert!(matches!(form.on_submit().await, Err(SubmitError::Validation(_))));
            assert_eq!(form.input(), input);
        }

        assert_eq!(mock.call_count(), 0);
        assert_eq!(drain_notices(&mut rx).len(), 3);
    }

    #[tokio::test]
    async fn test_fraud_response_sets_verdict_and_clears_input() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, mut rx) = form_with(&mock);

        form.on_input_change(numbered(FEATURE_COUNT));
        let submission = form.on_submit().await.unwrap();

        assert_eq!(submission.verdict, Verdict::Fraud);
        assert_eq!(form.verdict(), Verdict::Fraud);
        assert_eq!(form.verdict().label(), Some("Fraudulent Transaction"));
        assert_eq!(form.input(), "");
        assert!(drain_notices(&mut rx).is_empty());

        let calls = mock.calls.lock();
        assert_eq!(calls.len(), 1);
        let expected: Vec<f64> = (0..FEATURE_COUNT).map(|i| i as f64).collect();
        assert_eq!(calls[0].as_slice(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_legitimate_response_sets_verdict_and_clears_input() {
        let mock = MockPredictor::replying(Ok(Verdict::Legitimate));
        let (mut form, _rx) = form_with(&mock);

        form.on_input_change(numbered(FEATURE_COUNT));
        form.on_submit().await.unwrap();

        assert_eq!(form.verdict(), Verdict::Legitimate);
        assert_eq!(form.input(), "");
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_state() {
        let mock = MockPredictor::replying(Err(TransportError::Status(500)));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = FeatureSubmissionForm::with_state(
            mock.clone(),
            tx,
            numbered(FEATURE_COUNT),
            Verdict::Legitimate,
        );

        let result = form.on_submit().await;

        assert_eq!(result, Err(SubmitError::Transport(TransportError::Status(500))));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(form.input(), numbered(FEATURE_COUNT));
        assert_eq!(form.verdict(), Verdict::Legitimate);
        assert_eq!(drain_notices(&mut rx), vec![Notice::error(TRANSPORT_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_repeated_submits_are_independent() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, _rx) = form_with(&mock);

        form.on_input_change(numbered(FEATURE_COUNT));
        form.on_submit().await.unwrap();
        // Input was cleared, so the second click fails validation
        assert!(form.on_submit().await.is_err());

        form.on_input_change(numbered(FEATURE_COUNT));
        form.on_submit().await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_fail_submit() {
        let mock = MockPredictor::replying(Ok(Verdict::Fraud));
        let (mut form, rx) = form_with(&mock);
        drop(rx);

        form.on_input_change("1,2");
        assert!(matches!(form.on_submit().await, Err(SubmitError::Validation(_))));
    }
}
