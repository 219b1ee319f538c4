//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty or only whitespace.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An email address as entered by the account holder.
///
/// Leading and trailing whitespace is dropped on construction; the casing
/// the user typed is preserved for display. Comparisons between addresses
/// (uniqueness, login lookups) go through [`Email::normalize`], which folds
/// case so that `johndoe@email.com` and `JOHNDOE@email.com` are the same
/// account.
///
/// ## Constraints
///
/// - Must not be blank
/// - Length: at most 254 characters after trimming (RFC 5321 limit)
///
/// ## Examples
///
/// ```
/// use jungle_core::Email;
///
/// let email = Email::parse("  JohnDoe@email.com ").unwrap();
/// assert_eq!(email.as_str(), "JohnDoe@email.com");
/// assert_eq!(email.normalized(), "johndoe@email.com");
/// assert_eq!(Email::normalize(" JOHNDOE@email.com"), email.normalized());
///
/// assert!(Email::parse("").is_err());
/// assert!(Email::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or only whitespace
    /// - Is longer than 254 characters once trimmed
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Canonical comparison key for an address.
    ///
    /// Trims leading/trailing whitespace and lowercases. Whitespace inside
    /// the address is left alone.
    #[must_use]
    pub fn normalize(s: &str) -> String {
        s.trim().to_lowercase()
    }

    /// Returns the canonical comparison key for this address.
    #[must_use]
    pub fn normalized(&self) -> String {
        Self::normalize(&self.0)
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
