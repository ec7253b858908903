use std::fmt;
use thiserror::Error;

/// Third-party identity providers a form may offer next to password login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
}

impl fmt::Display for Provider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Google => write!(formatter, "Google"),
        }
    }
}

/// Failure of a remote authentication attempt.
///
/// `Rejected` displays the service message untouched because it is shown to
/// the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Sign in with {0} is not available yet.")]
    ProviderUnavailable(Provider),
}

impl AuthError {
    /// True when the request never produced a response from the service.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AuthError::Network(_) | AuthError::Timeout)
    }
}
