//! Sign-in form: email and password exchanged for a session. Success moves the
//! user to the home view and refreshes it so the new session shows up.

use super::{
    CredentialForm, CredentialInput, Field, FieldErrors, Link, Outcome,
    schema::{Rule, Schema, valid_email},
};
use crate::auth::{AuthError, AuthService, Provider, SignInRequest};
use crate::config::Routes;
use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Debug, Default)]
pub struct SignInInput {
    pub email: String,
    pub password: SecretString,
}

impl CredentialInput for SignInInput {
    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(self.email.as_str()),
            Field::Password => Some(self.password.expose_secret()),
            Field::Name | Field::ConfirmPassword => None,
        }
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = SecretString::from(value),
            Field::Name | Field::ConfirmPassword => return false,
        }
        true
    }
}

fn email_is_valid(input: &SignInInput) -> bool {
    valid_email(&input.email)
}

fn password_is_present(input: &SignInInput) -> bool {
    !input.password.expose_secret().is_empty()
}

const RULES: &[Rule<SignInInput>] = &[
    Rule {
        field: Field::Email,
        message: "Invalid email address",
        check: email_is_valid,
    },
    Rule {
        field: Field::Password,
        message: "Password is required",
        check: password_is_present,
    },
];

static SCHEMA: Schema<SignInInput> = Schema::new(RULES);

/// Validates sign-in input.
#[must_use]
pub fn validate_sign_in(input: &SignInInput) -> FieldErrors {
    SCHEMA.validate(input)
}

#[derive(Clone, Debug)]
pub struct SignInForm {
    routes: Routes,
}

impl SignInForm {
    #[must_use]
    pub fn new(routes: Routes) -> Self {
        Self { routes }
    }

    /// "Login with Google" is offered but not wired to any provider flow yet.
    ///
    /// # Errors
    /// Always returns [`AuthError::ProviderUnavailable`].
    pub fn sign_in_with_google(&self) -> Result<(), AuthError> {
        Err(AuthError::ProviderUnavailable(Provider::Google))
    }
}

impl CredentialForm for SignInForm {
    type Input = SignInInput;
    type Request = SignInRequest;

    fn name(&self) -> &'static str {
        "sign_in"
    }

    fn title(&self) -> &'static str {
        "Login to your account"
    }

    fn description(&self) -> &'static str {
        "Enter your email below to login to your account"
    }

    fn submit_label(&self) -> &'static str {
        "Login"
    }

    fn submitting_label(&self) -> &'static str {
        "Logging in..."
    }

    fn link(&self) -> Link {
        Link {
            prompt: "Don't have an account?",
            label: "Sign up",
            destination: self.routes.sign_up.clone(),
        }
    }

    fn schema(&self) -> &'static Schema<SignInInput> {
        &SCHEMA
    }

    fn request(&self, input: &SignInInput) -> SignInRequest {
        SignInRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }

    async fn call<A: AuthService>(
        &self,
        auth: &A,
        request: &SignInRequest,
    ) -> Result<(), AuthError> {
        auth.sign_in(request).await
    }

    fn on_success(&self) -> Outcome {
        Outcome::Navigate {
            destination: self.routes.home.clone(),
            refresh: true,
        }
    }

    fn alternates(&self) -> &'static [Provider] {
        &[Provider::Google]
    }

    fn alternate(&self, provider: Provider) -> Result<(), AuthError> {
        match provider {
            Provider::Google => self.sign_in_with_google(),
        }
    }
}
