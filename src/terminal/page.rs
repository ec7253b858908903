//! Page loop gluing a form controller to an interaction surface. The loop
//! renders, collects every field, then acts on the chosen control. A failed
//! attempt is acknowledged and the form stays open for a retry that keeps the
//! values already entered.
//!
//! Any successful outcome ends the page, `Stay` included: a created account
//! cannot be used until its address is confirmed, so a terminal session has
//! nothing left to do on the sign-up form.

use super::{Choice, FormInteraction};
use crate::auth::AuthService;
use crate::forms::{
    Acknowledge, CredentialForm, FormController, Navigator, Outcome, Submission, outcome,
};
use anyhow::Result;

/// How the page ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageExit {
    Completed(Outcome),
    Cancelled,
}

/// Drives `controller` until a submission succeeds or the user cancels.
///
/// # Errors
/// Returns an error if the interaction surface fails to read input.
pub async fn run<F, A, U>(controller: &mut FormController<F, A>, ui: &mut U) -> Result<PageExit>
where
    F: CredentialForm,
    A: AuthService,
    U: FormInteraction + Navigator + Acknowledge,
{
    loop {
        let view = controller.view();
        ui.render(&view);

        for field in &view.fields {
            if let Some(value) = ui.prompt_field(field)? {
                controller.set_field(field.field, value);
            }
        }

        match ui.choose(&controller.view())? {
            Choice::Cancel => return Ok(PageExit::Cancelled),
            Choice::Alternate(provider) => {
                let outcome = controller.alternate(provider);
                outcome::handle(&outcome, ui);
            }
            Choice::Submit => {
                // Field errors, if any, are rendered at the top of the next pass.
                let Submission::Settled(outcome) =
                    controller.submit_with(|view| ui.render(view)).await
                else {
                    continue;
                };

                outcome::handle(&outcome, ui);

                if outcome.is_success() {
                    return Ok(PageExit::Completed(outcome));
                }
            }
        }
    }
}
