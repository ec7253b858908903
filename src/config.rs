//! Build-time configuration for the auth endpoint and view addresses with
//! runtime overrides. Build-time values come from `AUTHFORMS_*` environment
//! variables at compile time; runtime values come from the CLI (which itself
//! falls back to the environment). Blank runtime values are ignored so an empty
//! variable never wipes a working default.

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_HOME_PATH: &str = "/";
const DEFAULT_SIGN_IN_PATH: &str = "/login";
const DEFAULT_SIGN_UP_PATH: &str = "/signup";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("auth URL is required")]
    MissingAuthUrl,
    #[error("invalid {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Client configuration. The API key is public-facing but still kept out of logs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth_url: String,
    pub api_key: Option<SecretString>,
    pub site_url: String,
    pub home_path: String,
    pub sign_in_path: String,
    pub sign_up_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_url: String::new(),
            api_key: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            sign_up_path: DEFAULT_SIGN_UP_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load(runtime: RuntimeConfig) -> Self {
        let auth_url = option_env!("AUTHFORMS_AUTH_URL").unwrap_or("");
        let site_url = option_env!("AUTHFORMS_SITE_URL").unwrap_or(DEFAULT_SITE_URL);

        let mut config = Self {
            auth_url: auth_url.to_string(),
            site_url: site_url.to_string(),
            ..Self::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        config
    }

    /// Validated auth API base URL.
    ///
    /// # Errors
    /// Returns an error if the URL is empty or does not parse.
    pub fn auth_base_url(&self) -> Result<Url, ConfigError> {
        let value = self.auth_url.trim();
        if value.is_empty() {
            return Err(ConfigError::MissingAuthUrl);
        }
        Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
            name: "auth URL",
            source,
        })
    }

    /// Resolves absolute view addresses against the site URL.
    ///
    /// # Errors
    /// Returns an error if the site URL or any path does not form a valid URL.
    pub fn routes(&self) -> Result<Routes, ConfigError> {
        let site = Url::parse(self.site_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            name: "site URL",
            source,
        })?;
        let join = |name: &'static str, path: &str| {
            site.join(path.trim())
                .map_err(|source| ConfigError::InvalidUrl { name, source })
        };

        Ok(Routes {
            home: join("home path", &self.home_path)?,
            sign_in: join("sign-in path", &self.sign_in_path)?,
            sign_up: join("sign-up path", &self.sign_up_path)?,
        })
    }
}

/// Absolute addresses of the views the forms link or navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    pub home: Url,
    pub sign_in: Url,
    pub sign_up: Url,
}

/// Runtime values supplied by the CLI; `None` keeps the build-time default.
#[derive(Default)]
pub struct RuntimeConfig {
    pub auth_url: Option<String>,
    pub api_key: Option<String>,
    pub site_url: Option<String>,
    pub home_path: Option<String>,
    pub sign_in_path: Option<String>,
    pub sign_up_path: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_url.as_deref().and_then(normalize_runtime_value) {
        config.auth_url = value;
    }
    if let Some(value) = runtime.api_key.as_deref().and_then(normalize_runtime_value) {
        config.api_key = Some(SecretString::from(value));
    }
    if let Some(value) = runtime.site_url.as_deref().and_then(normalize_runtime_value) {
        config.site_url = value;
    }
    if let Some(value) = runtime.home_path.as_deref().and_then(normalize_runtime_value) {
        config.home_path = value;
    }
    if let Some(value) = runtime
        .sign_in_path
        .as_deref()
        .and_then(normalize_runtime_value)
    {
        config.sign_in_path = value;
    }
    if let Some(value) = runtime
        .sign_up_path
        .as_deref()
        .and_then(normalize_runtime_value)
    {
        config.sign_up_path = value;
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
