//! Explicit form state and its transition function. Every change to input,
//! errors or the submission flag goes through [`FormState::apply`], so the
//! lifecycle can be exercised without any rendering surface.

use super::{CredentialForm, CredentialInput, Field, FieldErrors, Outcome, outcome};
use crate::auth::AuthError;

/// Per-instance form state. Discarded with the form; nothing is persisted.
#[derive(Debug, Default)]
pub struct FormState<I> {
    pub input: I,
    pub errors: FieldErrors,
    /// Submission flag: raised between accepted input and settlement.
    pub submitting: bool,
    /// Set by the first submit attempt; later edits revalidate immediately.
    pub attempted: bool,
}

#[derive(Debug)]
pub enum Event {
    FieldChanged { field: Field, value: String },
    SubmitRequested,
    Settled(Result<(), AuthError>),
}

/// Why a submit request did not produce a remote call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A call is already in flight.
    Busy,
    /// Validation found field errors.
    Invalid,
}

/// Work the caller must perform after a transition.
#[derive(Debug)]
pub enum Command<R> {
    None,
    /// Validation failed; render `errors` inline.
    ShowErrors,
    /// Issue exactly one remote call with this payload.
    Call(R),
    Outcome(Outcome),
}

impl<I: CredentialInput> FormState<I> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: I::default(),
            errors: FieldErrors::new(),
            submitting: false,
            attempted: false,
        }
    }

    /// Applies `event` and returns the command it produces.
    pub fn apply<F>(&mut self, form: &F, event: Event) -> Command<F::Request>
    where
        F: CredentialForm<Input = I>,
    {
        match event {
            Event::FieldChanged { field, value } => {
                if self.input.set(field, value) && self.attempted {
                    self.errors = form.validate(&self.input);
                }
                Command::None
            }
            Event::SubmitRequested => match self.request_submit(form) {
                Ok(request) => Command::Call(request),
                Err(Rejection::Invalid) => Command::ShowErrors,
                Err(Rejection::Busy) => Command::None,
            },
            Event::Settled(result) => Command::Outcome(self.settle(form, result)),
        }
    }

    /// Validates and, on a clean pass, raises the submission flag and returns
    /// the payload for the single remote call.
    ///
    /// # Errors
    /// Returns [`Rejection::Busy`] while a call is in flight and
    /// [`Rejection::Invalid`] when the fresh error set is not empty.
    pub fn request_submit<F>(&mut self, form: &F) -> Result<F::Request, Rejection>
    where
        F: CredentialForm<Input = I>,
    {
        if self.submitting {
            return Err(Rejection::Busy);
        }
        self.attempted = true;
        self.errors = form.validate(&self.input);
        if !self.errors.is_empty() {
            return Err(Rejection::Invalid);
        }
        self.submitting = true;
        Ok(form.request(&self.input))
    }

    /// Lowers the submission flag and resolves the outcome of the call.
    pub fn settle<F>(&mut self, form: &F, result: Result<(), AuthError>) -> Outcome
    where
        F: CredentialForm<Input = I>,
    {
        self.submitting = false;
        outcome::decide(form.on_success(), result)
    }
}
