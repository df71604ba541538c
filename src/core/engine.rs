use crate::core::form::RegistrationForm;
use crate::core::{FormSubmission, Navigator, SubmissionSink};
use crate::utils::error::Result;

pub const DEFAULT_SUCCESS_ROUTE: &str = "/success";

/// Drives a submit: validate the form, move the user to the confirmation
/// view, then hand the payload to the sink. Navigation depends only on
/// validation; the handoff outcome is reported but never gates it.
pub struct RegistrationEngine<S: SubmissionSink, N: Navigator> {
    sink: S,
    navigator: N,
    success_route: String,
}

impl<S: SubmissionSink, N: Navigator> RegistrationEngine<S, N> {
    pub fn new(sink: S, navigator: N) -> Self {
        Self::with_success_route(sink, navigator, DEFAULT_SUCCESS_ROUTE)
    }

    pub fn with_success_route(sink: S, navigator: N, success_route: &str) -> Self {
        Self {
            sink,
            navigator,
            success_route: success_route.to_string(),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub async fn submit(&self, form: &mut RegistrationForm) -> Result<FormSubmission> {
        tracing::info!("Validating registration");
        let submission = form.submit()?;
        tracing::info!("Registration valid, handing off {} answers", submission.len());

        self.navigator.navigate(&self.success_route);

        // Single attempt; the endpoint owns whatever happens next.
        if let Err(e) = self.sink.submit(&submission).await {
            tracing::warn!("Handoff to the form endpoint failed: {}", e);
            return Err(e);
        }
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::navigation::RecordingNavigator;
    use crate::core::age_gate::AgeGate;
    use crate::core::{Clock, FieldConfig, FieldVariant};
    use crate::utils::error::RegistrationError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    struct Today;

    impl Clock for Today {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap()
        }
    }

    #[derive(Default)]
    struct MockSink {
        received: Mutex<Vec<FormSubmission>>,
        reject: bool,
    }

    #[async_trait]
    impl SubmissionSink for MockSink {
        async fn submit(&self, submission: &FormSubmission) -> Result<()> {
            self.received.lock().unwrap().push(submission.clone());
            if self.reject {
                return Err(RegistrationError::SubmissionRejected { status: 503 });
            }
            Ok(())
        }
    }

    fn form(birth: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new(
            vec![FieldConfig::new("birth", "entry.1", "Birth", FieldVariant::Date).gated_by_age()],
            AgeGate::new(14, Arc::new(Today)),
        );
        form.input("birth", birth).unwrap();
        form
    }

    #[test]
    fn test_valid_form_is_handed_off_once() {
        let engine = RegistrationEngine::new(MockSink::default(), RecordingNavigator::new());
        let mut form = form("2011-06-21");

        let submission = tokio_test::block_on(engine.submit(&mut form)).unwrap();
        assert_eq!(submission.get("entry.1"), vec!["2011-06-21"]);
        assert_eq!(engine.sink.received.lock().unwrap().len(), 1);
        assert_eq!(engine.navigator().routes(), vec![DEFAULT_SUCCESS_ROUTE.to_string()]);
    }

    #[test]
    fn test_invalid_form_never_reaches_sink() {
        let engine = RegistrationEngine::new(MockSink::default(), RecordingNavigator::new());
        let mut form = form("2011-06-22");

        assert!(tokio_test::block_on(engine.submit(&mut form)).is_err());
        assert!(engine.sink.received.lock().unwrap().is_empty());
        assert!(engine.navigator().routes().is_empty());
    }

    #[test]
    fn test_rejected_handoff_still_navigates() {
        let sink = MockSink {
            reject: true,
            ..Default::default()
        };
        let engine = RegistrationEngine::new(sink, RecordingNavigator::new());
        let mut form = form("2011-06-21");

        let err = tokio_test::block_on(engine.submit(&mut form)).unwrap_err();
        assert!(matches!(err, RegistrationError::SubmissionRejected { status: 503 }));
        assert_eq!(engine.sink.received.lock().unwrap().len(), 1);
        assert_eq!(engine.navigator().routes(), vec![DEFAULT_SUCCESS_ROUTE.to_string()]);
    }
}
