//! Terminal rendering collaborator. Pure presentation: it draws a
//! [`FormView`], collects raw field values and reports which control the user
//! picked. All lifecycle decisions stay in the form controller.

pub mod page;

pub use page::{PageExit, run};

use crate::auth::Provider;
use crate::forms::{Acknowledge, FieldView, FormView, Navigator};
use anyhow::{Context, Result};
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use tracing::debug;
use url::Url;

/// Control picked under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Submit,
    Alternate(Provider),
    Cancel,
}

/// Interaction surface used by the page loop.
pub trait FormInteraction {
    fn render(&mut self, view: &FormView);

    /// Reads a new raw value for `field`, or `None` to keep the current one.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be read.
    fn prompt_field(&mut self, field: &FieldView) -> Result<Option<String>>;

    /// Asks which control to activate.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be read.
    fn choose(&mut self, view: &FormView) -> Result<Choice>;
}

/// Default interactive implementation backed by `dialoguer`.
pub struct Terminal {
    theme: ColorfulTheme,
    location: Option<Url>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            location: None,
        }
    }
}

impl Terminal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the last navigation pointed, if any.
    #[must_use]
    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }
}

/// Answer to a secret prompt: an empty answer keeps a value already entered.
fn secret_answer(has_value: bool, answer: String) -> Option<String> {
    if has_value && answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

impl FormInteraction for Terminal {
    fn render(&mut self, view: &FormView) {
        println!();
        println!("{}", view.title);
        println!("{}", view.description);
        println!();
        for field in &view.fields {
            println!("  {}: {}", field.label, field.value);
            if let Some(description) = field.description {
                println!("    {description}");
            }
            if let Some(error) = &field.error {
                println!("    ✗ {error}");
            }
        }
        if view.submit_disabled {
            println!("  [{}] (disabled)", view.submit_label);
        }
        println!(
            "  {} {} <{}>",
            view.link.prompt, view.link.label, view.link.destination
        );
    }

    fn prompt_field(&mut self, field: &FieldView) -> Result<Option<String>> {
        if field.field.is_secret() {
            // Secrets are never echoed back as initial text.
            let has_value = !field.value.is_empty();
            let prompt = if has_value {
                format!("{} (Enter to keep)", field.label)
            } else {
                field.label.to_string()
            };
            let answer = Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
                .with_context(|| format!("failed to read {}", field.field))?;
            return Ok(secret_answer(has_value, answer));
        }

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(field.label)
            .allow_empty(true);
        if !field.value.is_empty() {
            input = input.with_initial_text(field.value.clone());
        } else if let Some(placeholder) = field.field.placeholder() {
            input = input.with_prompt(format!("{} ({placeholder})", field.label));
        }
        input
            .interact_text()
            .map(Some)
            .with_context(|| format!("failed to read {}", field.field))
    }

    fn choose(&mut self, view: &FormView) -> Result<Choice> {
        let mut choices = vec![Choice::Submit];
        choices.extend(view.alternates.iter().copied().map(Choice::Alternate));
        choices.push(Choice::Cancel);

        let labels: Vec<String> = choices
            .iter()
            .map(|choice| match choice {
                Choice::Submit => view.submit_label.to_string(),
                Choice::Alternate(provider) => format!("Login with {provider}"),
                Choice::Cancel => "Cancel".to_string(),
            })
            .collect();

        let index = Select::with_theme(&self.theme)
            .items(&labels)
            .default(0)
            .interact()
            .context("failed to read selection")?;

        Ok(choices.get(index).copied().unwrap_or(Choice::Cancel))
    }
}

impl Navigator for Terminal {
    fn navigate_to(&mut self, destination: &Url) {
        println!("→ {destination}");
        self.location = Some(destination.clone());
    }

    fn refresh_current_view(&mut self) {
        if let Some(location) = &self.location {
            println!("Signed in. Viewing {location}");
        }
    }
}

impl Acknowledge for Terminal {
    fn acknowledge(&mut self, message: &str) {
        println!();
        println!("! {message}");
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text();
        if let Err(err) = result {
            debug!("acknowledgment prompt failed: {err}");
        }
    }
}
