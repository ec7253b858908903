//! Remote authentication collaborator. Forms only see the [`AuthService`]
//! contract; the HTTP implementation talks to a GoTrue-compatible API. Request
//! payloads carry passwords, so they must never be logged.
//!
//! Every failure, whether the service rejected the credentials or the request
//! never completed, collapses into a single [`AuthError`] handed to the outcome
//! handler. Nothing here retries.

pub mod client;
pub mod error;
pub mod types;

pub use client::HttpAuthClient;
pub use error::{AuthError, Provider};
pub use types::{Profile, SignInRequest, SignUpRequest};

/// Remote authentication service contract used by the credential forms.
///
/// Calls are awaited on a single-threaded runtime, so implementations do not
/// need to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Exchange an email and password for a session.
    ///
    /// # Errors
    /// Returns [`AuthError`] when the service rejects the credentials or cannot be reached.
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), AuthError>;

    /// Register a new account. The service is expected to send a confirmation
    /// email pointing back at `request.email_redirect_to`.
    ///
    /// # Errors
    /// Returns [`AuthError`] when the service rejects the registration or cannot be reached.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError>;
}

impl<T: AuthService> AuthService for &T {
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), AuthError> {
        (**self).sign_in(request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError> {
        (**self).sign_up(request).await
    }
}
