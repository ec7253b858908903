use crate::auth::HttpAuthClient;
use crate::cli::actions::Args;
use crate::forms::{FormController, SignInForm};
use crate::terminal::{self, PageExit, Terminal};
use anyhow::Result;
use tracing::{debug, info};

/// Run the sign-in page until the user signs in or cancels.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the terminal fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = HttpAuthClient::new(args.auth_url.as_str(), args.api_key)?;
    debug!(auth_url = client.base_url(), "auth client ready");

    let mut controller = FormController::new(SignInForm::new(args.routes), client);
    let mut ui = Terminal::new();

    match terminal::run(&mut controller, &mut ui).await? {
        PageExit::Completed(_) => info!(location = ?ui.location(), "signed in"),
        PageExit::Cancelled => debug!("sign-in cancelled"),
    }

    Ok(())
}
