use crate::cli::actions::{Action, sign_in, sign_up};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::SignIn(args) => sign_in::execute(args).await,
        Action::SignUp(args) => sign_up::execute(args).await,
    }
}
