//! Credential form core: schema validation, the submission state machine and
//! outcome handling, shared by the sign-in and sign-up forms.
//!
//! Flow Overview: keystrokes only update input. A submit attempt validates
//! synchronously; a clean pass raises the submission flag and issues exactly
//! one remote call. Settlement drops the flag and yields an [`Outcome`].

pub mod controller;
pub mod fields;
pub mod outcome;
pub mod schema;
pub mod sign_in;
pub mod sign_up;
pub mod state;
pub mod view;

pub use controller::{FormController, Submission};
pub use fields::{Field, FieldErrors};
pub use outcome::{Acknowledge, Navigator, Outcome};
pub use sign_in::{SignInForm, SignInInput};
pub use sign_up::{SignUpForm, SignUpInput};
pub use state::{Command, Event, FormState, Rejection};
pub use view::{FieldView, FormView, Link};

use crate::auth::{AuthError, AuthService, Provider};
use schema::Schema;

/// Mutable credential input owned by one form instance.
pub trait CredentialInput: Default {
    /// Current raw value of `field`, or `None` if this form lacks it.
    fn value(&self, field: Field) -> Option<&str>;

    /// Replaces the value of `field`. Returns `false` if this form lacks it.
    fn set(&mut self, field: Field, value: String) -> bool;
}

/// Behavior that differs between the sign-in and sign-up forms.
#[allow(async_fn_in_trait)]
pub trait CredentialForm {
    type Input: CredentialInput + 'static;
    type Request;

    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Submit control label while idle.
    fn submit_label(&self) -> &'static str;

    /// Submit control label while a call is in flight.
    fn submitting_label(&self) -> &'static str;

    /// Static link to the sibling form.
    fn link(&self) -> Link;

    fn schema(&self) -> &'static Schema<Self::Input>;

    /// Builds the remote payload from input that passed validation.
    fn request(&self, input: &Self::Input) -> Self::Request;

    /// Issues the remote call for `request`.
    async fn call<A: AuthService>(&self, auth: &A, request: &Self::Request)
    -> Result<(), AuthError>;

    fn on_success(&self) -> Outcome;

    /// Alternate identity providers offered next to the submit control.
    fn alternates(&self) -> &'static [Provider] {
        &[]
    }

    /// Starts sign-in through an alternate provider.
    ///
    /// # Errors
    /// Returns [`AuthError::ProviderUnavailable`] unless the form wires the provider.
    fn alternate(&self, provider: Provider) -> Result<(), AuthError> {
        Err(AuthError::ProviderUnavailable(provider))
    }

    fn validate(&self, input: &Self::Input) -> FieldErrors {
        self.schema().validate(input)
    }

    fn fields(&self) -> Vec<Field> {
        self.schema().fields().collect()
    }

    /// Helper text rendered under `field`, if this form has one.
    fn field_description(&self, _field: Field) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use secrecy::SecretString;

    #[test]
    fn default_methods_run_the_form_schema() {
        let form = SignUpForm::new(AppConfig::default().routes().unwrap());
        assert_eq!(
            form.fields(),
            vec![Field::Name, Field::Email, Field::Password, Field::ConfirmPassword]
        );

        let input = SignUpInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: SecretString::from("password1"),
            confirm_password: SecretString::from("password1"),
        };
        assert!(form.validate(&input).is_empty());

        let sign_in = SignInForm::new(AppConfig::default().routes().unwrap());
        assert_eq!(
            sign_in.validate(&SignInInput::default()).keys(),
            vec!["email", "password"]
        );
    }

    #[test]
    fn only_sign_up_carries_field_descriptions() {
        let routes = AppConfig::default().routes().unwrap();
        let sign_up = SignUpForm::new(routes.clone());
        let sign_in = SignInForm::new(routes);

        assert_eq!(
            sign_up.field_description(Field::Email),
            Some("We'll use this to contact you.")
        );
        assert_eq!(
            sign_up.field_description(Field::Password),
            Some("At least 8 characters long.")
        );
        assert_eq!(sign_up.field_description(Field::ConfirmPassword), None);
        assert_eq!(sign_in.field_description(Field::Email), None);
    }
}
