//! Declarative validation schemas. A schema is an ordered list of per-field
//! rules plus an optional cross-field refinement; running it is a pure function
//! from input to [`FieldErrors`] that never mutates the input.

use super::fields::{Field, FieldErrors};
use once_cell::sync::Lazy;
use regex::Regex;

/// Address grammar: no leading dot, no `..`, a local part ending on a word-ish
/// character and a domain with a TLD of at least two letters.
static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .ok()
});

/// Returns whether `email` is a syntactically valid address.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Length check in characters, not bytes.
#[must_use]
pub fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// A single field predicate and the message shown when it fails.
pub struct Rule<I> {
    pub field: Field,
    pub message: &'static str,
    pub check: fn(&I) -> bool,
}

pub struct Schema<I: 'static> {
    rules: &'static [Rule<I>],
    refinement: Option<Rule<I>>,
}

impl<I: 'static> Schema<I> {
    #[must_use]
    pub const fn new(rules: &'static [Rule<I>]) -> Self {
        Self {
            rules,
            refinement: None,
        }
    }

    /// Schema with a cross-field predicate whose error lands on
    /// `refinement.field` only.
    #[must_use]
    pub const fn with_refinement(rules: &'static [Rule<I>], refinement: Rule<I>) -> Self {
        Self {
            rules,
            refinement: Some(refinement),
        }
    }

    /// Fields this schema has rules for, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        let mut seen = Vec::new();
        self.rules.iter().filter_map(move |rule| {
            if seen.contains(&rule.field) {
                None
            } else {
                seen.push(rule.field);
                Some(rule.field)
            }
        })
    }

    /// Runs every rule against `input` and returns a fresh error set.
    #[must_use]
    pub fn validate(&self, input: &I) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for rule in self.rules {
            if errors.contains(rule.field) {
                continue;
            }
            if !(rule.check)(input) {
                errors.insert(rule.field, rule.message);
            }
        }

        // A field that already failed its own rules keeps that message.
        if let Some(refinement) = &self.refinement
            && !errors.contains(refinement.field)
            && !(refinement.check)(input)
        {
            errors.insert(refinement.field, refinement.message);
        }

        errors
    }
}
