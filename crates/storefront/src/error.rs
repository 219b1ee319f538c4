//! Errors raised when a record cannot be persisted.
//!
//! Plain `save` reports failure as `false` and leaves the reasons on the
//! record; `save_strict` returns them as a [`RecordError`].

use thiserror::Error;

use jungle_core::Errors;

use crate::db::RepositoryError;

/// A record failed to save.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record did not pass validation.
    #[error("Validation failed: {0}")]
    Invalid(Errors),

    /// The backing store rejected the write.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,
}

#[cfg(test)]
mod tests {
    use jungle_core::ErrorKind;

    use super::*;

    #[test]
    fn test_invalid_message_lists_full_messages() {
        let mut errors = Errors::new();
        errors.add("email", ErrorKind::Taken);
        errors.add("password", ErrorKind::TooShort { minimum: 3 });

        assert_eq!(
            RecordError::Invalid(errors).to_string(),
            "Validation failed: Email has already been taken, \
             Password is too short (minimum is 3 characters)"
        );
    }
}
