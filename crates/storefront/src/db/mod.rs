//! Persistence for catalog and user records.
//!
//! # Tables
//!
//! - `categories` - Catalog categories
//! - `products` - Products, each referencing exactly one category
//! - `users` - Accounts, unique on the normalized (trimmed, lowercased) email
//!
//! Records reach storage only through the [`Store`] trait. Domain records in
//! [`crate::models`] validate themselves first; the store still enforces its
//! own constraints (unique email, existing category) so that a record that
//! skipped validation cannot corrupt the tables.
//!
//! [`MemoryStore`] is the in-process implementation used by the CLI and tests.

use thiserror::Error;

use jungle_core::{CategoryId, ProductId, UserId};

mod memory;
mod rows;

pub use memory::MemoryStore;
pub use rows::{CategoryRow, ProductRow, ProductValues, UserRow, UserValues};

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Stored data is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested row was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Constraint violation (e.g., unique email, missing category).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Backing store for categories, products and users.
///
/// Lookups by email take the already-normalized key (see
/// [`jungle_core::Email::normalize`]); the store never folds case itself.
pub trait Store {
    /// Insert a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn insert_category(&mut self, name: &str) -> Result<CategoryRow, RepositoryError>;

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn find_category(&self, id: CategoryId) -> Result<Option<CategoryRow>, RepositoryError>;

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced category does not exist.
    fn insert_product(&mut self, values: ProductValues) -> Result<ProductRow, RepositoryError>;

    /// Overwrite an existing product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Conflict` if the referenced category does not exist.
    fn update_product(
        &mut self,
        id: ProductId,
        values: ProductValues,
    ) -> Result<ProductRow, RepositoryError>;

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn find_product(&self, id: ProductId) -> Result<Option<ProductRow>, RepositoryError>;

    /// All products in a category, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn products_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ProductRow>, RepositoryError>;

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the normalized email already exists.
    fn insert_user(&mut self, values: UserValues) -> Result<UserRow, RepositoryError>;

    /// Overwrite an existing user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this ID.
    /// Returns `RepositoryError::Conflict` if the new email belongs to another user.
    fn update_user(&mut self, id: UserId, values: UserValues) -> Result<UserRow, RepositoryError>;

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn find_user(&self, id: UserId) -> Result<Option<UserRow>, RepositoryError>;

    /// Get a user by normalized email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn find_user_by_email(&self, normalized_email: &str)
    -> Result<Option<UserRow>, RepositoryError>;

    /// Whether a user other than `except` already holds this normalized email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing store fails.
    fn email_taken(
        &self,
        normalized_email: &str,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError>;
}
