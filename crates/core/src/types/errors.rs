//! Validation error collection.
//!
//! Every record carries an [`Errors`] value describing why its current
//! in-memory state is invalid. Each entry is keyed by the attribute it is
//! attributed to and renders as a human-readable full message such as
//! `"Password confirmation doesn't match Password"`.

use core::fmt;

use serde::Serialize;

/// The rule an attribute failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value is missing, empty, or only whitespace.
    Blank,
    /// Value differs from the attribute it must confirm.
    Confirmation {
        /// Attribute being confirmed (e.g. `password`).
        of: &'static str,
    },
    /// Value has fewer characters than allowed.
    TooShort {
        /// Minimum number of characters.
        minimum: usize,
    },
    /// Value has more characters than allowed.
    TooLong {
        /// Maximum number of characters.
        maximum: usize,
    },
    /// Value is already used by another persisted record.
    Taken,
}

impl ErrorKind {
    /// Message without the attribute prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Blank => "can't be blank".to_owned(),
            Self::Confirmation { of } => format!("doesn't match {}", humanize(of)),
            Self::TooShort { minimum: 1 } => "is too short (minimum is 1 character)".to_owned(),
            Self::TooShort { minimum } => {
                format!("is too short (minimum is {minimum} characters)")
            }
            Self::TooLong { maximum } => {
                format!("is too long (maximum is {maximum} characters)")
            }
            Self::Taken => "has already been taken".to_owned(),
        }
    }
}

/// A single failed rule on a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Attribute the error is attributed to (e.g. `first_name`).
    pub attribute: &'static str,
    /// The failed rule.
    #[serde(flatten)]
    pub kind: ErrorKind,
}

impl FieldError {
    /// Message prefixed with the humanized attribute name.
    #[must_use]
    pub fn full_message(&self) -> String {
        format!("{} {}", humanize(self.attribute), self.kind.message())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

/// Ordered collection of validation errors for one record.
///
/// ```
/// use jungle_core::{ErrorKind, Errors};
///
/// let mut errors = Errors::new();
/// errors.add("first_name", ErrorKind::Blank);
/// errors.add("password", ErrorKind::TooShort { minimum: 3 });
///
/// assert_eq!(
///     errors.full_messages(),
///     vec![
///         "First name can't be blank",
///         "Password is too short (minimum is 3 characters)",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors(Vec<FieldError>);

impl Errors {
    /// An empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failed rule for an attribute.
    pub fn add(&mut self, attribute: &'static str, kind: ErrorKind) {
        self.0.push(FieldError { attribute, kind });
    }

    /// Drop all recorded errors.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Full messages for every recorded error, in insertion order.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::full_message).collect()
    }

    /// Returns `true` if any error renders as exactly `message`.
    #[must_use]
    pub fn include(&self, message: &str) -> bool {
        self.0.iter().any(|e| e.full_message() == message)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turn an attribute key into a sentence-start label.
///
/// `first_name` becomes `First name`; a trailing `_id` is dropped so that
/// reference keys read like the association they point at.
fn humanize(attribute: &str) -> String {
    let base = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = base.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
