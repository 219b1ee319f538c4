//! Integration tests for Jungle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jungle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `product_validations` - Product presence rules and category reference
//! - `user_validations` - User presence, confirmation, length, uniqueness
//! - `user_authentication` - Credential lookup
//!
//! This library holds the shared fixtures those tests build records from.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;

use jungle_storefront::{Category, MemoryStore, NewProduct, NewUser, RepositoryError};

/// Wrap a plaintext password.
#[must_use]
pub fn secret(password: &str) -> Option<SecretString> {
    Some(SecretString::from(password.to_owned()))
}

/// A persisted category named `test-category`.
///
/// # Errors
///
/// Returns `RepositoryError` if the store fails.
pub fn test_category(store: &mut MemoryStore) -> Result<Category, RepositoryError> {
    Category::create(store, "test-category")
}

/// Attributes of a valid product, minus the category.
#[must_use]
pub fn product_attrs() -> NewProduct {
    NewProduct {
        name: Some("testing".to_owned()),
        price_cents: Some(1000),
        quantity: Some(1),
        ..NewProduct::default()
    }
}

/// Attributes of John Doe, a valid user.
#[must_use]
pub fn john_doe() -> NewUser {
    NewUser {
        first_name: Some("John".to_owned()),
        last_name: Some("Doe".to_owned()),
        email: Some("johndoe@email.com".to_owned()),
        password: secret("password"),
        password_confirmation: secret("password"),
    }
}
