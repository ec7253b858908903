//! Submission controller: owns one form instance, its state and the injected
//! authentication collaborator for the lifetime of the form.
//!
//! Validation always completes before any network I/O for an attempt, and at
//! most one remote call is in flight per instance. There is no cancellation:
//! dropping a submit future mid-call abandons the call and lowers the flag.

use super::state::{Event, FormState, Rejection};
use super::{CredentialForm, Field, FieldErrors, FormView, Outcome, outcome};
use crate::auth::{AuthService, Provider};
use tracing::{debug, info};

/// Result of a user-initiated submit action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; no call was made.
    Invalid(FieldErrors),
    /// A call is already in flight; this action was ignored.
    Busy,
    /// The single remote call settled.
    Settled(Outcome),
}

/// Lowers the submission flag when dropped, so an abandoned call never
/// leaves the form stuck in flight.
struct InFlight<'a, I>(&'a mut FormState<I>);

impl<I> Drop for InFlight<'_, I> {
    fn drop(&mut self) {
        self.0.submitting = false;
    }
}

pub struct FormController<F: CredentialForm, A> {
    form: F,
    auth: A,
    state: FormState<F::Input>,
}

impl<F, A> FormController<F, A>
where
    F: CredentialForm,
    A: AuthService,
{
    pub fn new(form: F, auth: A) -> Self {
        Self {
            form,
            auth,
            state: FormState::new(),
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn state(&self) -> &FormState<F::Input> {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Records a keystroke-level change to `field`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.apply(
            &self.form,
            Event::FieldChanged {
                field,
                value: value.into(),
            },
        );
    }

    pub fn view(&self) -> FormView {
        FormView::build(&self.form, &self.state)
    }

    /// Validates the current input and raises the submission flag.
    fn begin(&mut self) -> Result<F::Request, Submission> {
        match self.state.request_submit(&self.form) {
            Ok(request) => Ok(request),
            Err(Rejection::Busy) => {
                debug!(form = self.form.name(), "submit ignored while in flight");
                Err(Submission::Busy)
            }
            Err(Rejection::Invalid) => {
                debug!(
                    form = self.form.name(),
                    fields = ?self.state.errors.keys(),
                    "submit blocked by validation"
                );
                Err(Submission::Invalid(self.state.errors.clone()))
            }
        }
    }

    /// Issues the single remote call for `request` and settles the form.
    async fn finish(&mut self, request: F::Request) -> Outcome {
        info!(form = self.form.name(), "submitting credentials");

        let mut in_flight = InFlight(&mut self.state);
        let result = self.form.call(&self.auth, &request).await;
        match &result {
            Ok(()) => info!(form = self.form.name(), "submission accepted"),
            Err(err) => debug!(
                form = self.form.name(),
                transport = err.is_transport(),
                "submission failed"
            ),
        }

        in_flight.0.settle(&self.form, result)
    }

    /// Runs a complete submit action: validate, call once, settle.
    pub async fn submit(&mut self) -> Submission {
        self.submit_with(|_| {}).await
    }

    /// Like [`submit`](Self::submit), but hands the in-flight view (submit
    /// disabled, submitting label) to `on_in_flight` before the remote call.
    pub async fn submit_with<H>(&mut self, on_in_flight: H) -> Submission
    where
        H: FnOnce(&FormView),
    {
        match self.begin() {
            Ok(request) => {
                on_in_flight(&self.view());
                Submission::Settled(self.finish(request).await)
            }
            Err(halted) => halted,
        }
    }

    /// Handles an alternate provider control. It never touches the
    /// submission flag or the authentication service.
    pub fn alternate(&self, provider: Provider) -> Outcome {
        debug!(form = self.form.name(), %provider, "alternate provider requested");
        outcome::decide(self.form.on_success(), self.form.alternate(provider))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, SignInRequest, SignUpRequest};
    use crate::config::{AppConfig, Routes};
    use crate::forms::{SignInForm, SignUpForm};
    use secrecy::ExposeSecret;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    /// Test double counting calls and replaying a canned result.
    #[derive(Default)]
    struct FakeAuth {
        sign_in_calls: Cell<usize>,
        sign_up_calls: Cell<usize>,
        last_email: RefCell<Option<String>>,
        failure: Option<AuthError>,
        hang: bool,
    }

    impl FakeAuth {
        fn failing(err: AuthError) -> Self {
            Self {
                failure: Some(err),
                ..Self::default()
            }
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Self::default()
            }
        }

        async fn result(&self) -> Result<(), AuthError> {
            if self.hang {
                std::future::pending::<()>().await;
            }
            self.failure.clone().map_or(Ok(()), Err)
        }
    }

    impl AuthService for FakeAuth {
        async fn sign_in(&self, request: &SignInRequest) -> Result<(), AuthError> {
            self.sign_in_calls.set(self.sign_in_calls.get() + 1);
            self.last_email.replace(Some(request.email.clone()));
            self.result().await
        }

        async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError> {
            self.sign_up_calls.set(self.sign_up_calls.get() + 1);
            self.last_email.replace(Some(request.email.clone()));
            self.result().await
        }
    }

    fn routes() -> Routes {
        AppConfig::default().routes().unwrap()
    }

    fn filled_sign_up<A: AuthService>(auth: A) -> FormController<SignUpForm, A> {
        let mut controller = FormController::new(SignUpForm::new(routes()), auth);
        controller.set_field(Field::Name, "Ada");
        controller.set_field(Field::Email, "ada@example.com");
        controller.set_field(Field::Password, "password1");
        controller.set_field(Field::ConfirmPassword, "password1");
        controller
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_service() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@");
        controller.set_field(Field::Password, "secret");

        let Submission::Invalid(errors) = controller.submit().await else {
            panic!("expected validation to block the submit");
        };
        assert!(errors.contains(Field::Email));
        assert_eq!(auth.sign_in_calls.get(), 0);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn empty_password_scenario() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@test.com");

        let Submission::Invalid(errors) = controller.submit().await else {
            panic!("expected validation to block the submit");
        };
        assert_eq!(errors.keys(), vec!["password"]);
        assert!(errors.get(Field::Password).unwrap().contains("required"));
        assert_eq!(auth.sign_in_calls.get(), 0);
    }

    #[tokio::test]
    async fn short_name_scenario() {
        let auth = FakeAuth::default();
        let mut controller = filled_sign_up(&auth);
        controller.set_field(Field::Name, "A");

        let Submission::Invalid(errors) = controller.submit().await else {
            panic!("expected validation to block the submit");
        };
        assert_eq!(errors.keys(), vec!["name"]);
        assert!(
            errors
                .get(Field::Name)
                .unwrap()
                .contains("at least 2 characters")
        );
        assert_eq!(auth.sign_up_calls.get(), 0);
    }

    #[tokio::test]
    async fn resubmitting_while_in_flight_issues_no_call() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@test.com");
        controller.set_field(Field::Password, "secret");

        let request = controller.begin().unwrap();
        assert_eq!(request.password.expose_secret(), "secret");
        assert!(controller.is_submitting());
        assert!(controller.view().submit_disabled);

        assert_eq!(controller.submit().await, Submission::Busy);
        assert_eq!(auth.sign_in_calls.get(), 0);

        controller.finish(request).await;
        assert_eq!(auth.sign_in_calls.get(), 1);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn in_flight_view_is_disabled_and_relabelled() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@test.com");
        controller.set_field(Field::Password, "secret");

        let mut seen = None;
        let submission = controller
            .submit_with(|view| seen = Some((view.submit_disabled, view.submit_label)))
            .await;

        assert!(matches!(submission, Submission::Settled(Outcome::Navigate { .. })));
        assert_eq!(seen, Some((true, "Logging in...")));
        assert!(!controller.view().submit_disabled);
    }

    #[tokio::test]
    async fn in_flight_hook_is_skipped_when_validation_fails() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);

        let mut called = false;
        let submission = controller.submit_with(|_| called = true).await;

        assert!(matches!(submission, Submission::Invalid(_)));
        assert!(!called);
    }

    #[tokio::test]
    async fn abandoned_call_lowers_the_flag() {
        let auth = FakeAuth::hanging();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@test.com");
        controller.set_field(Field::Password, "secret");

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;
        assert!(abandoned.is_err());
        assert_eq!(auth.sign_in_calls.get(), 1);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn separate_instances_do_not_share_the_flag() {
        let auth = FakeAuth::hanging();
        let mut first = FormController::new(SignInForm::new(routes()), &auth);
        first.set_field(Field::Email, "user@test.com");
        first.set_field(Field::Password, "secret");

        let ready = FakeAuth::default();
        let mut second = FormController::new(SignInForm::new(routes()), &ready);
        second.set_field(Field::Email, "other@test.com");
        second.set_field(Field::Password, "secret");

        let abandoned = tokio::time::timeout(Duration::from_millis(20), first.submit()).await;
        assert!(abandoned.is_err());

        assert!(matches!(
            second.submit().await,
            Submission::Settled(Outcome::Navigate { .. })
        ));
        assert_eq!(ready.last_email.borrow().as_deref(), Some("other@test.com"));
        assert!(!first.is_submitting());
        assert!(!first.view().submit_disabled);
    }

    #[tokio::test]
    async fn sign_in_success_navigates_home() {
        let auth = FakeAuth::default();
        let mut controller = FormController::new(SignInForm::new(routes()), &auth);
        controller.set_field(Field::Email, "user@test.com");
        controller.set_field(Field::Password, "secret");

        let submission = controller.submit().await;
        assert_eq!(
            submission,
            Submission::Settled(Outcome::Navigate {
                destination: routes().home,
                refresh: true,
            })
        );
        assert_eq!(auth.sign_in_calls.get(), 1);
        assert_eq!(auth.last_email.borrow().as_deref(), Some("user@test.com"));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn sign_up_rejection_is_acknowledged_verbatim() {
        let auth = FakeAuth::failing(AuthError::Rejected {
            status: 422,
            message: "User already registered".to_string(),
        });
        let mut controller = filled_sign_up(&auth);

        let submission = controller.submit().await;
        assert_eq!(
            submission,
            Submission::Settled(Outcome::Acknowledge("User already registered".to_string()))
        );
        assert_eq!(auth.sign_up_calls.get(), 1);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn transport_failure_allows_manual_retry() {
        let auth = FakeAuth::failing(AuthError::Network("connection refused".to_string()));
        let mut controller = filled_sign_up(&auth);

        assert!(matches!(
            controller.submit().await,
            Submission::Settled(Outcome::Acknowledge(_))
        ));
        assert!(!controller.is_submitting());

        assert!(matches!(
            controller.submit().await,
            Submission::Settled(Outcome::Acknowledge(_))
        ));
        assert_eq!(auth.sign_up_calls.get(), 2);
    }

    #[tokio::test]
    async fn sign_up_success_stays_put() {
        let auth = FakeAuth::default();
        let mut controller = filled_sign_up(&auth);

        assert_eq!(controller.submit().await, Submission::Settled(Outcome::Stay));
        assert_eq!(auth.sign_up_calls.get(), 1);
    }

    #[test]
    fn google_alternate_skips_the_service() {
        let auth = FakeAuth::default();
        let controller = FormController::new(SignInForm::new(routes()), &auth);

        assert_eq!(
            controller.alternate(Provider::Google),
            Outcome::Acknowledge("Sign in with Google is not available yet.".to_string())
        );
        assert_eq!(auth.sign_in_calls.get(), 0);
        assert!(!controller.is_submitting());
    }
}
