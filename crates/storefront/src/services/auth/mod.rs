//! Authentication service.
//!
//! Provides email + password authentication against persisted users.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::{debug, warn};

use jungle_core::Email;

use crate::db::Store;
use crate::models::user::User;

/// Authentication service.
///
/// Handles credential checks for persisted users.
pub struct AuthService<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Find the persisted user these credentials belong to.
    ///
    /// The email is matched after trimming surrounding whitespace and
    /// ignoring case; the password must match exactly. Returns `Ok(None)`
    /// for an unknown email or a wrong password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the user lookup fails.
    pub fn authenticate_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let key = Email::normalize(email);

        let Some(row) = self.store.find_user_by_email(&key)? else {
            debug!("Authentication failed: unknown email");
            return Ok(None);
        };

        match verify_password(password, &row.password_digest) {
            Ok(true) => {
                debug!(user_id = %row.id, "Authenticated user");
                Ok(Some(User::from(row)))
            }
            Ok(false) => {
                debug!(user_id = %row.id, "Authentication failed: wrong password");
                Ok(None)
            }
            Err(_) => {
                warn!(user_id = %row.id, "Stored password digest is unreadable");
                Ok(None)
            }
        }
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
///
/// Returns `Ok(false)` when the password does not match.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if `hash` is not a valid PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;
    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use crate::db::{MemoryStore, UserValues};
    use crate::models::user::NewUser;

    use super::*;

    fn seed_john(store: &mut MemoryStore) -> User {
        User::create(
            store,
            NewUser {
                first_name: Some("John".to_owned()),
                last_name: Some("Doe".to_owned()),
                email: Some("johndoe@email.com".to_owned()),
                password: Some(SecretString::from("password".to_owned())),
                password_confirmation: Some(SecretString::from("password".to_owned())),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("password").unwrap();
        assert!(verify_password("password", &hash).unwrap());
        assert!(!verify_password("Password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash_password("password").unwrap(), hash_password("password").unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("password", "not-a-phc-string"),
            Err(AuthError::PasswordHash)
        ));
    }

    #[test]
    fn test_authenticate_padded_mixed_case_email() {
        let mut store = MemoryStore::new();
        let john = seed_john(&mut store);

        let user = AuthService::new(&store)
            .authenticate_with_credentials("  JohnDOE@email.com  ", "password")
            .unwrap();
        assert_eq!(user, Some(john));
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let mut store = MemoryStore::new();
        seed_john(&mut store);

        let user = AuthService::new(&store)
            .authenticate_with_credentials("johndoe@email.com", "1234")
            .unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_corrupt_digest_is_a_failed_match() {
        let mut store = MemoryStore::new();
        store
            .insert_user(UserValues {
                first_name: "John".to_owned(),
                last_name: "Doe".to_owned(),
                email: Email::parse("johndoe@email.com").unwrap(),
                password_digest: "garbage".to_owned(),
            })
            .unwrap();

        let user = AuthService::new(&store)
            .authenticate_with_credentials("johndoe@email.com", "password")
            .unwrap();
        assert!(user.is_none());
    }
}
