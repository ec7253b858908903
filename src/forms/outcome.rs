//! Maps a settled remote call to what the user sees next. Failures are global
//! to the attempt: the service does not say which field was wrong, so the
//! message is acknowledged as a whole instead of being pinned to a field.

use crate::auth::AuthError;
use tracing::debug;
use url::Url;

/// What happens after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Leave the form for `destination`, optionally refreshing cached view state.
    Navigate { destination: Url, refresh: bool },
    /// Remain on the current view with nothing further to show.
    Stay,
    /// Block on the user acknowledging `message`.
    Acknowledge(String),
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Acknowledge(_))
    }
}

/// Resolve the result of a remote call: success takes the form's success
/// outcome, any failure surfaces its message verbatim.
#[must_use]
pub fn decide(on_success: Outcome, result: Result<(), AuthError>) -> Outcome {
    match result {
        Ok(()) => on_success,
        Err(err) => Outcome::Acknowledge(err.to_string()),
    }
}

/// Navigation collaborator, only driven by successful sign-in.
pub trait Navigator {
    fn navigate_to(&mut self, destination: &Url);

    fn refresh_current_view(&mut self);
}

/// Blocking acknowledgment surface for global failures.
pub trait Acknowledge {
    /// Shows `message` and returns once the user has dismissed it.
    fn acknowledge(&mut self, message: &str);
}

/// Applies `outcome` to the navigation and acknowledgment collaborators.
pub fn handle<S>(outcome: &Outcome, surface: &mut S)
where
    S: Navigator + Acknowledge,
{
    match outcome {
        Outcome::Navigate {
            destination,
            refresh,
        } => {
            debug!(destination = %destination, refresh, "advancing after submission");
            surface.navigate_to(destination);
            if *refresh {
                surface.refresh_current_view();
            }
        }
        Outcome::Stay => {}
        Outcome::Acknowledge(message) => surface.acknowledge(message),
    }
}
