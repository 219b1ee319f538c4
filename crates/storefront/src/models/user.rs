//! User account records.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use jungle_core::{Email, EmailError, ErrorKind, Errors, UserId, is_blank};

use crate::db::{RepositoryError, Store, UserRow, UserValues};
use crate::error::RecordError;
use crate::services::auth::hash_password;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Attributes for building a user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub password_confirmation: Option<SecretString>,
}

/// A user account.
///
/// `password` and `password_confirmation` are the plaintext inputs of a
/// password change; the store only ever sees the Argon2 digest.
/// A user loaded from the store has neither set, and its password rules are
/// skipped until a new password is assigned.
///
/// Users compare equal when they are the same persisted account.
#[derive(Clone)]
pub struct User {
    id: Option<UserId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub password_confirmation: Option<SecretString>,
    password_digest: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    errors: Errors,
}

impl User {
    /// Build an unsaved user.
    #[must_use]
    pub fn new(attrs: NewUser) -> Self {
        Self {
            id: None,
            first_name: attrs.first_name,
            last_name: attrs.last_name,
            email: attrs.email,
            password: attrs.password,
            password_confirmation: attrs.password_confirmation,
            password_digest: None,
            created_at: None,
            updated_at: None,
            errors: Errors::new(),
        }
    }

    /// Build a user and try to save it.
    ///
    /// The user is returned whether or not it saved; check
    /// [`User::is_persisted`] and [`User::errors`].
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Repository` if the store fails.
    /// Returns `RecordError::PasswordHash` if the password cannot be hashed.
    pub fn create<S: Store + ?Sized>(store: &mut S, attrs: NewUser) -> Result<Self, RecordError> {
        let mut user = Self::new(attrs);
        user.save(store)?;
        Ok(user)
    }

    /// Load a persisted user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn find<S: Store + ?Sized>(store: &S, id: UserId) -> Result<Option<Self>, RepositoryError> {
        Ok(store.find_user(id)?.map(Self::from))
    }

    /// Load a persisted user by email, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn find_by_email<S: Store + ?Sized>(
        store: &S,
        email: &str,
    ) -> Result<Option<Self>, RepositoryError> {
        Ok(store
            .find_user_by_email(&Email::normalize(email))?
            .map(Self::from))
    }

    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Argon2 digest of the stored password, once saved.
    #[must_use]
    pub fn password_digest(&self) -> Option<&str> {
        self.password_digest.as_deref()
    }

    /// First and last name joined by a space, skipping blanks.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Errors from the most recent validation run.
    #[must_use]
    pub const fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Run every rule against the current attributes.
    ///
    /// Email uniqueness is checked against users already in `store`, ignoring
    /// case and surrounding whitespace; this user's own row does not count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the uniqueness lookup fails.
    pub fn validate<S: Store + ?Sized>(&self, store: &S) -> Result<Errors, RepositoryError> {
        let mut errors = Errors::new();

        if is_blank(self.first_name.as_deref()) {
            errors.add("first_name", ErrorKind::Blank);
        }
        if is_blank(self.last_name.as_deref()) {
            errors.add("last_name", ErrorKind::Blank);
        }

        match self.email.as_deref() {
            Some(email) if !is_blank(Some(email)) => match Email::parse(email) {
                Ok(email) => {
                    if store.email_taken(&email.normalized(), self.id)? {
                        errors.add("email", ErrorKind::Taken);
                    }
                }
                Err(EmailError::TooLong { max }) => {
                    errors.add("email", ErrorKind::TooLong { maximum: max });
                }
                Err(EmailError::Empty) => errors.add("email", ErrorKind::Blank),
            },
            _ => errors.add("email", ErrorKind::Blank),
        }

        if self.id.is_none() || self.password.is_some() {
            self.validate_password(&mut errors);
        }

        Ok(errors)
    }

    fn validate_password(&self, errors: &mut Errors) {
        let password = self.password.as_ref().map(|p| p.expose_secret());
        let confirmation = self
            .password_confirmation
            .as_ref()
            .map(|c| c.expose_secret());

        if is_blank(password) {
            errors.add("password", ErrorKind::Blank);
        } else if password.is_some_and(|p| p.chars().count() < MIN_PASSWORD_LENGTH) {
            errors.add(
                "password",
                ErrorKind::TooShort {
                    minimum: MIN_PASSWORD_LENGTH,
                },
            );
        }

        if is_blank(confirmation) {
            errors.add("password_confirmation", ErrorKind::Blank);
        }

        if let (Some(password), Some(confirmation)) = (password, confirmation) {
            if !is_blank(Some(password))
                && !is_blank(Some(confirmation))
                && password.as_bytes() != confirmation.as_bytes()
            {
                errors.add(
                    "password_confirmation",
                    ErrorKind::Confirmation { of: "password" },
                );
            }
        }
    }

    /// Validate and keep the result on the record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the uniqueness lookup fails.
    pub fn is_valid<S: Store + ?Sized>(&mut self, store: &S) -> Result<bool, RepositoryError> {
        self.errors = self.validate(store)?;
        Ok(self.errors.is_empty())
    }

    /// Validate, hash any newly assigned password, then insert (new) or
    /// update (persisted).
    ///
    /// Returns `Ok(false)` when validation fails; the reasons are on
    /// [`User::errors`]. A unique-email conflict raised by the store is
    /// reported the same way as the validation rule.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Repository` if the store fails.
    /// Returns `RecordError::PasswordHash` if the password cannot be hashed.
    pub fn save<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<bool, RecordError> {
        if !self.is_valid(&*store)? {
            debug!(errors = %self.errors, "User failed validation");
            return Ok(false);
        }

        let Some(values) = self.values()? else {
            return Ok(false);
        };

        let result = match self.id {
            Some(id) => store.update_user(id, values),
            None => store.insert_user(values),
        };

        let row = match result {
            Ok(row) => row,
            Err(RepositoryError::Conflict(_)) => {
                self.errors.add("email", ErrorKind::Taken);
                debug!("User email claimed by another account during save");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        self.apply_row(row);
        Ok(true)
    }

    /// Save, treating a validation failure as an error.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Invalid` if validation fails.
    /// Returns `RecordError::Repository` if the store fails.
    /// Returns `RecordError::PasswordHash` if the password cannot be hashed.
    pub fn save_strict<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<(), RecordError> {
        if self.save(store)? {
            Ok(())
        } else {
            Err(RecordError::Invalid(self.errors.clone()))
        }
    }

    fn values(&self) -> Result<Option<UserValues>, RecordError> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.as_deref(),
        ) else {
            return Ok(None);
        };
        let Ok(email) = Email::parse(email) else {
            return Ok(None);
        };

        let password_digest = match (&self.password, &self.password_digest) {
            (Some(password), _) => {
                hash_password(password.expose_secret()).map_err(|_| RecordError::PasswordHash)?
            }
            (None, Some(digest)) => digest.clone(),
            (None, None) => return Ok(None),
        };

        Ok(Some(UserValues {
            first_name,
            last_name,
            email,
            password_digest,
        }))
    }

    fn apply_row(&mut self, row: UserRow) {
        self.id = Some(row.id);
        self.first_name = Some(row.first_name);
        self.last_name = Some(row.last_name);
        self.email = Some(row.email.into_inner());
        self.password_digest = Some(row.password_digest);
        self.created_at = Some(row.created_at);
        self.updated_at = Some(row.updated_at);
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let mut user = Self::new(NewUser::default());
        user.apply_row(row);
        user
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &self.password)
            .field("password_confirmation", &self.password_confirmation)
            .field("password_digest", &self.password_digest.as_ref().map(|_| "[REDACTED]"))
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("errors", &self.errors)
            .finish()
    }
}
