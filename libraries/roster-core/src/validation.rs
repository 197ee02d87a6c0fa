//! Field-level validation for creation drafts.
//!
//! Every rule is evaluated independently so that all violated fields are
//! reported together rather than stopping at the first failure.

use crate::types::Draft;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Pattern a non-empty email must match
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"))
}

/// A form field of the creation draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `name` input
    Name,
    /// `email` input
    Email,
    /// `username` input
    Username,
}

impl Field {
    /// Field name as used by the rendering layer
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Username => "username",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field value broke
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Value missing (or blank, for the name)
    #[error("required")]
    Required,

    /// Value present but not shaped like an email address
    #[error("invalid format")]
    InvalidFormat,
}

/// Field → violation mapping produced by [`validate_draft`].
///
/// Never empty when returned as an error. Iteration order is the form order
/// (name, email, username).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, Violation>,
}

impl ValidationErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, violation: Violation) {
        self.fields.insert(field, violation);
    }

    /// Violation recorded for `field`, if any
    pub fn get(&self, field: Field) -> Option<Violation> {
        self.fields.get(&field).copied()
    }

    /// Whether no field is in error
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in error
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over `(field, violation)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, Violation)> + '_ {
        self.fields.iter().map(|(field, violation)| (*field, *violation))
    }

    /// Human-readable message for one field, e.g. "name required"
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|violation| format!("{field} {violation}"))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid draft")?;
        for (i, (field, violation)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{field} {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check whether `email` matches [`EMAIL_PATTERN`]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a creation draft.
///
/// Rules:
/// - `name` must be non-empty after trimming
/// - `email` must be non-empty and match [`EMAIL_PATTERN`]
/// - `username` must be non-empty
pub fn validate_draft(draft: &Draft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, Violation::Required);
    }

    if draft.email.is_empty() {
        errors.insert(Field::Email, Violation::Required);
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, Violation::InvalidFormat);
    }

    if draft.username.is_empty() {
        errors.insert(Field::Username, Violation::Required);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
