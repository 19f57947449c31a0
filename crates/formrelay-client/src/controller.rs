/// Contact form controller
///
/// `FormModel` holds everything the page shows; `FormController` pairs it
/// with a transport and drives it through
/// `Idle -> Validating -> Submitting -> Success | Error`.
/// A failed validation returns to `Idle` with field errors recorded.
use crate::constants::{LABEL_SEND, LABEL_SENDING, MSG_GENERIC_FAILURE};
use crate::error::ClientError;
use crate::transport::SubmitTransport;
use crate::validation::{self, FieldError, FormField, FormFields};
use formrelay_core::models::{SubmissionRequest, SubmissionResponse};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Colour of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

/// How a `submit()` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Invalid,
    Delivered,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub fields: FormFields,
    pub errors: Vec<FieldError>,
    pub focus: Option<FormField>,
    pub state: FormState,
    pub status: Option<StatusLine>,
}

impl FormModel {
    /// Clears previous errors, trims the fields and validates them
    ///
    /// Returns whether the form may be sent. On failure every error is
    /// recorded and the first invalid field takes focus.
    pub fn validate(&mut self) -> bool {
        self.state = FormState::Validating;
        self.errors.clear();
        self.focus = None;

        self.fields = self.fields.trimmed();
        self.errors = validation::validate(&self.fields);

        self.state = FormState::Idle;
        match self.errors.first() {
            Some(first) => {
                self.focus = Some(first.field);
                false
            }
            None => true,
        }
    }

    /// Validates and, if valid, enters `Submitting`
    ///
    /// Returns the payload to send, or `None` when validation failed.
    pub fn begin_submit(&mut self) -> Result<Option<SubmissionRequest>, ClientError> {
        if self.state == FormState::Submitting {
            return Err(ClientError::Busy);
        }

        if !self.validate() {
            debug!(invalid = self.errors.len(), "Form has invalid fields");
            return Ok(None);
        }

        self.state = FormState::Submitting;
        self.status = None;
        Ok(Some(self.fields.to_request()))
    }

    /// Leaves `Submitting` without an answer, keeping the fields
    pub fn abandon_submit(&mut self) {
        if self.state != FormState::Submitting {
            return;
        }
        warn!("Submission abandoned before the endpoint answered");
        self.status = Some(StatusLine {
            text: MSG_GENERIC_FAILURE.to_string(),
            tone: StatusTone::Danger,
        });
        self.state = FormState::Error;
    }

    /// Applies the endpoint's answer and leaves `Submitting`
    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionResponse, ClientError>,
    ) -> SubmitOutcome {
        match result {
            Ok(response) => {
                self.status = Some(StatusLine {
                    text: response.message,
                    tone: StatusTone::Success,
                });
                self.fields = FormFields::default();
                self.state = FormState::Success;
                SubmitOutcome::Delivered
            }
            Err(err) => {
                warn!(error = %err, "Submission failed");
                self.status = Some(StatusLine {
                    text: err.status_text(),
                    tone: StatusTone::Danger,
                });
                self.state = FormState::Error;
                SubmitOutcome::Failed
            }
        }
    }
}

/// Submit button as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}

/// Everything the page needs to redraw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub fields: FormFields,
    pub errors: Vec<FieldError>,
    /// Fields to mark `aria-invalid`
    pub invalid: Vec<FormField>,
    pub focus: Option<FormField>,
    pub button: SubmitButton,
    pub status: Option<StatusLine>,
}

impl FormView {
    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

pub fn render(model: &FormModel) -> FormView {
    let busy = model.state == FormState::Submitting;

    FormView {
        fields: model.fields.clone(),
        errors: model.errors.clone(),
        invalid: model.errors.iter().map(|e| e.field).collect(),
        focus: model.focus,
        button: SubmitButton {
            disabled: busy,
            label: if busy { LABEL_SENDING } else { LABEL_SEND },
        },
        status: model.status.clone(),
    }
}

/// Holds the model while a request is outstanding
///
/// Dropping it before `finish` (the submit future was cancelled) still
/// takes the model out of `Submitting`.
struct InFlight<'a> {
    model: &'a mut FormModel,
}

impl InFlight<'_> {
    fn finish(self, result: Result<SubmissionResponse, ClientError>) -> SubmitOutcome {
        self.model.finish_submit(result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.model.abandon_submit();
    }
}

pub struct FormController<T: SubmitTransport> {
    transport: T,
    model: FormModel,
}

impl<T: SubmitTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            model: FormModel::default(),
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn state(&self) -> FormState {
        self.model.state
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.model.fields.set(field, value);
    }

    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.model.fields.website = value.into();
    }

    pub fn validate(&mut self) -> bool {
        self.model.validate()
    }

    /// Validates and sends the form
    ///
    /// Only `ClientError::Busy` is returned as an error; transport failures
    /// end in `SubmitOutcome::Failed` with the status line set.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ClientError> {
        let Some(payload) = self.model.begin_submit()? else {
            return Ok(SubmitOutcome::Invalid);
        };

        let in_flight = InFlight {
            model: &mut self.model,
        };
        let result = self.transport.submit(&payload).await;
        let outcome = in_flight.finish(result);
        info!(outcome = ?outcome, "Submission finished");

        Ok(outcome)
    }

    pub fn render(&self) -> FormView {
        render(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MSG_ENTER_NAME;
    use crate::transport::MockSubmitTransport;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn fill<T: SubmitTransport>(controller: &mut FormController<T>) {
        controller.set_field(FormField::Name, " Jo ");
        controller.set_field(FormField::Email, "jo@example.com");
        controller.set_field(FormField::Subject, "Hi");
        controller.set_field(FormField::Message, "Hello");
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let mut transport = MockSubmitTransport::new();
        transport.expect_submit().times(0);

        let mut controller = FormController::new(transport);
        controller.set_field(FormField::Email, "nope");

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(controller.state(), FormState::Idle);

        let view = controller.render();
        assert_eq!(view.focus, Some(FormField::Name));
        assert_eq!(view.error_for(FormField::Name), Some(MSG_ENTER_NAME));
        assert_eq!(view.invalid.len(), 4);
        assert!(!view.button.disabled);
    }

    #[tokio::test]
    async fn test_success_resets_fields() {
        let mut transport = MockSubmitTransport::new();
        transport
            .expect_submit()
            .withf(|payload| payload.name.as_deref() == Some("Jo"))
            .times(1)
            .returning(|_| Ok(SubmissionResponse::new("Thank you!")));

        let mut controller = FormController::new(transport);
        fill(&mut controller);

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(controller.state(), FormState::Success);

        let view = controller.render();
        assert_eq!(view.fields, FormFields::default());
        assert_eq!(
            view.status,
            Some(StatusLine {
                text: "Thank you!".to_string(),
                tone: StatusTone::Success
            })
        );
        assert_eq!(view.button.label, LABEL_SEND);
        assert!(!view.button.disabled);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let mut transport = MockSubmitTransport::new();
        transport.expect_submit().times(1).returning(|_| {
            Err(ClientError::Rejected {
                status: 500,
                message: None,
            })
        });

        let mut controller = FormController::new(transport);
        fill(&mut controller);

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(controller.state(), FormState::Error);

        let view = controller.render();
        assert_eq!(view.fields.name, "Jo");
        let status = view.status.unwrap();
        assert_eq!(status.text, MSG_GENERIC_FAILURE);
        assert_eq!(status.tone, StatusTone::Danger);
        assert!(!view.button.disabled);
    }

    #[test]
    fn test_submitting_renders_busy_button() {
        let mut model = FormModel::default();
        model.fields.name = "Jo".to_string();
        model.fields.email = "jo@example.com".to_string();
        model.fields.subject = "Hi".to_string();
        model.fields.message = "Hello".to_string();
        model.status = Some(StatusLine {
            text: "old".to_string(),
            tone: StatusTone::Danger,
        });

        let payload = model.begin_submit().unwrap();
        assert!(payload.is_some());
        assert_eq!(model.state, FormState::Submitting);

        let view = render(&model);
        assert!(view.button.disabled);
        assert_eq!(view.button.label, LABEL_SENDING);
        assert_eq!(view.status, None);
    }

    #[test]
    fn test_second_submit_while_submitting_is_busy() {
        let mut model = FormModel::default();
        model.state = FormState::Submitting;

        assert!(matches!(model.begin_submit(), Err(ClientError::Busy)));
        assert_eq!(model.state, FormState::Submitting);
    }

    /// Stalls on the first request, answers every later one
    struct StallOnce {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SubmitTransport for StallOnce {
        async fn submit(
            &self,
            _payload: &SubmissionRequest,
        ) -> Result<SubmissionResponse, ClientError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            Ok(SubmissionResponse::new("Thank you!"))
        }
    }

    #[tokio::test]
    async fn test_cancelled_submit_releases_the_form() {
        let mut controller = FormController::new(StallOnce {
            calls: AtomicUsize::new(0),
        });
        fill(&mut controller);

        let cancelled = tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;
        assert!(cancelled.is_err());

        assert_eq!(controller.state(), FormState::Error);
        let view = controller.render();
        assert!(!view.button.disabled);
        assert_eq!(view.button.label, LABEL_SEND);
        assert_eq!(view.fields.name, "Jo");
        assert_eq!(view.status.unwrap().text, MSG_GENERIC_FAILURE);

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(controller.state(), FormState::Success);
    }

    #[test]
    fn test_abandon_outside_submitting_is_noop() {
        let mut model = FormModel::default();
        model.abandon_submit();
        assert_eq!(model.state, FormState::Idle);
        assert_eq!(model.status, None);
    }

    #[test]
    fn test_successful_validate_returns_to_idle() {
        let mut transport = MockSubmitTransport::new();
        transport.expect_submit().times(0);

        let mut controller = FormController::new(transport);
        fill(&mut controller);

        assert!(controller.validate());
        assert_eq!(controller.state(), FormState::Idle);
        assert!(!controller.render().button.disabled);
    }

    #[test]
    fn test_validation_clears_previous_errors() {
        let mut model = FormModel::default();
        assert!(!model.validate());
        assert_eq!(model.errors.len(), 4);

        model.fields.name = "Jo".to_string();
        model.fields.email = "jo@example.com".to_string();
        model.fields.subject = "Hi".to_string();
        model.fields.message = "Hello".to_string();
        assert!(model.validate());
        assert!(model.errors.is_empty());
        assert_eq!(model.focus, None);
    }
}
