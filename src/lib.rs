//! # authforms
//!
//! Sign-in and sign-up credential forms for a GoTrue-compatible authentication
//! service.
//!
//! ## Form Lifecycle
//!
//! Each form instance owns its input, a field error set and a submission flag.
//!
//! 1. **Validate:** A submit attempt runs the form's declarative schema. Any field
//!    error stops the attempt before the network is touched.
//! 2. **Submit:** Valid input raises the submission flag and issues exactly one
//!    remote call. A second submit while the flag is raised is ignored.
//! 3. **Settle:** The flag drops, and the outcome handler either advances
//!    (navigate and refresh, or stay) or shows the remote message verbatim.
//!
//! The authentication service, navigation and rendering are collaborators
//! injected through traits so the lifecycle can run without a terminal.
//! Passwords and API keys are carried as `SecretString` and must never be logged.

pub mod auth;
pub mod cli;
pub mod config;
pub mod forms;
pub mod terminal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
