//! HTTP client for a GoTrue-compatible authentication API. Requests share one
//! timeout policy and one error mapping so transport failures and service
//! rejections reach the forms through the same path. The client attaches the
//! project API key but never logs it or the request bodies.

use super::{AuthError, AuthService, SignInRequest, SignUpRequest};
use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{Instrument, debug, info_span};

/// Default request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;
/// Body keys checked, in order, for a human readable error message.
const MESSAGE_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl HttpAuthClient {
    /// Build a client for the auth API rooted at `base_url`
    /// (for example `https://project.supabase.co/auth/v1`).
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(base_url: &str, api_key: Option<SecretString>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts JSON and expects any successful status; the body is discarded.
    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<(), AuthError> {
        let url = build_url_with_base(&self.base_url, path);
        let mut builder = self.client.post(&url).query(query).json(body);

        if let Some(key) = &self.api_key {
            builder = builder
                .header("apikey", key.expose_secret())
                .bearer_auth(key.expose_secret());
        }

        let span = info_span!("auth.request", http.method = "POST", url = %url);
        let response = builder
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }
}

impl AuthService for HttpAuthClient {
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), AuthError> {
        self.post_json("/token", &[("grant_type", "password")], request)
            .await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError> {
        self.post_json(
            "/signup",
            &[("redirect_to", request.email_redirect_to.as_str())],
            request,
        )
        .await
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AuthError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Timeout
    } else {
        AuthError::Network(err.to_string())
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response
        .text()
        .await
        .map_err(|err| AuthError::Parse(format!("Failed to read response: {err}")))?;

    debug!(status = status.as_u16(), "auth request rejected");

    Err(AuthError::Rejected {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extracts the service message from an error body, falling back to the
/// sanitized raw body.
fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let message = MESSAGE_KEYS
            .iter()
            .filter_map(|key| json.get(key).and_then(Value::as_str))
            .map(str::trim)
            .find(|value| !value.is_empty());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
