//! Request payloads for the authentication API. These carry plaintext
//! passwords, so they must never be logged; `Debug` redacts them.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

/// User metadata stored with the account at registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub full_name: String,
}

/// Registration payload. `email_redirect_to` travels as the `redirect_to`
/// query parameter, not in the body.
#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    #[serde(rename = "data")]
    pub profile: Profile,
    #[serde(skip)]
    pub email_redirect_to: String,
}
