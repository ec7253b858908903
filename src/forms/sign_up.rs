//! Sign-up form: registers an account with a display name. The service sends a
//! confirmation email pointing back at the sign-in view, so success keeps the
//! user where they are; no session exists until the address is confirmed.

use super::{
    CredentialForm, CredentialInput, Field, FieldErrors, Link, Outcome,
    schema::{Rule, Schema, min_chars, valid_email},
};
use crate::auth::{AuthError, AuthService, Profile, SignUpRequest};
use crate::config::Routes;
use secrecy::{ExposeSecret, SecretString};

/// Minimum display name length, in characters.
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Debug, Default)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl CredentialInput for SignUpInput {
    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(self.name.as_str()),
            Field::Email => Some(self.email.as_str()),
            Field::Password => Some(self.password.expose_secret()),
            Field::ConfirmPassword => Some(self.confirm_password.expose_secret()),
        }
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = SecretString::from(value),
            Field::ConfirmPassword => self.confirm_password = SecretString::from(value),
        }
        true
    }
}

fn name_is_long_enough(input: &SignUpInput) -> bool {
    min_chars(&input.name, MIN_NAME_LENGTH)
}

fn email_is_valid(input: &SignUpInput) -> bool {
    valid_email(&input.email)
}

fn password_is_long_enough(input: &SignUpInput) -> bool {
    min_chars(input.password.expose_secret(), MIN_PASSWORD_LENGTH)
}

fn confirmation_is_present(input: &SignUpInput) -> bool {
    !input.confirm_password.expose_secret().is_empty()
}

fn passwords_match(input: &SignUpInput) -> bool {
    input.password.expose_secret() == input.confirm_password.expose_secret()
}

const RULES: &[Rule<SignUpInput>] = &[
    Rule {
        field: Field::Name,
        message: "Name must be at least 2 characters",
        check: name_is_long_enough,
    },
    Rule {
        field: Field::Email,
        message: "Please enter a valid email",
        check: email_is_valid,
    },
    Rule {
        field: Field::Password,
        message: "Password must be at least 8 characters",
        check: password_is_long_enough,
    },
    Rule {
        field: Field::ConfirmPassword,
        message: "Please confirm your password",
        check: confirmation_is_present,
    },
];

// Mismatch errors land on the confirmation field only.
static SCHEMA: Schema<SignUpInput> = Schema::with_refinement(
    RULES,
    Rule {
        field: Field::ConfirmPassword,
        message: "Passwords do not match",
        check: passwords_match,
    },
);

/// Validates sign-up input.
#[must_use]
pub fn validate_sign_up(input: &SignUpInput) -> FieldErrors {
    SCHEMA.validate(input)
}

#[derive(Clone, Debug)]
pub struct SignUpForm {
    routes: Routes,
}

impl SignUpForm {
    #[must_use]
    pub fn new(routes: Routes) -> Self {
        Self { routes }
    }
}

impl CredentialForm for SignUpForm {
    type Input = SignUpInput;
    type Request = SignUpRequest;

    fn name(&self) -> &'static str {
        "sign_up"
    }

    fn title(&self) -> &'static str {
        "Create an account"
    }

    fn description(&self) -> &'static str {
        "Enter your information below to create your account"
    }

    fn submit_label(&self) -> &'static str {
        "Create Account"
    }

    fn submitting_label(&self) -> &'static str {
        "Creating Account..."
    }

    fn link(&self) -> Link {
        Link {
            prompt: "Already have an account?",
            label: "Sign in",
            destination: self.routes.sign_in.clone(),
        }
    }

    fn schema(&self) -> &'static Schema<SignUpInput> {
        &SCHEMA
    }

    fn request(&self, input: &SignUpInput) -> SignUpRequest {
        SignUpRequest {
            email: input.email.clone(),
            password: input.password.clone(),
            profile: Profile {
                full_name: input.name.clone(),
            },
            email_redirect_to: self.routes.sign_in.to_string(),
        }
    }

    async fn call<A: AuthService>(
        &self,
        auth: &A,
        request: &SignUpRequest,
    ) -> Result<(), AuthError> {
        auth.sign_up(request).await
    }

    fn field_description(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => Some("We'll use this to contact you."),
            Field::Password => Some("At least 8 characters long."),
            Field::Name | Field::ConfirmPassword => None,
        }
    }

    // The terminal page ends on `Stay`; the account is unusable until the
    // address is confirmed, so there is nothing further to show there.
    // TODO: confirm with product whether a "check your email" notice belongs here.
    fn on_success(&self) -> Outcome {
        Outcome::Stay
    }
}
