//! Render model handed to the rendering collaborator: per-field values and
//! inline errors, the submit control state and the static sibling link.

use super::{CredentialForm, CredentialInput, Field, FormState};
use crate::auth::Provider;
use url::Url;

/// Static link to the sibling form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub prompt: &'static str,
    pub label: &'static str,
    pub destination: Url,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    /// Helper text shown under the input.
    pub description: Option<&'static str>,
    /// Current value; secret fields are masked one `•` per character.
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub alternates: Vec<Provider>,
    pub link: Link,
}

impl FormView {
    /// Builds the view for `form` in `state`.
    pub fn build<F: CredentialForm>(form: &F, state: &FormState<F::Input>) -> Self {
        let fields = form
            .fields()
            .into_iter()
            .map(|field| {
                let raw = state.input.value(field).unwrap_or_default();
                let value = if field.is_secret() {
                    "•".repeat(raw.chars().count())
                } else {
                    raw.to_string()
                };
                FieldView {
                    field,
                    label: field.label(),
                    description: form.field_description(field),
                    value,
                    error: state.errors.get(field).map(str::to_string),
                }
            })
            .collect();

        Self {
            title: form.title(),
            description: form.description(),
            fields,
            submit_label: if state.submitting {
                form.submitting_label()
            } else {
                form.submit_label()
            },
            submit_disabled: state.submitting,
            alternates: form.alternates().to_vec(),
            link: form.link(),
        }
    }

    /// Inline error for `field`, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|view| view.field == field)
            .and_then(|view| view.error.as_deref())
    }
}
