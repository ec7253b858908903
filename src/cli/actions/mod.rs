pub mod sign_in;
pub mod sign_up;

// Internal "interpreter" for `Action`.
mod run;

use crate::config::Routes;
use secrecy::SecretString;
use url::Url;

/// Resolved configuration shared by both form pages.
#[derive(Debug)]
pub struct Args {
    pub auth_url: Url,
    pub api_key: Option<SecretString>,
    pub routes: Routes,
}

#[derive(Debug)]
pub enum Action {
    SignIn(Args),
    SignUp(Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
