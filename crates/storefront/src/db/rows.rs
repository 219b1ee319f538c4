//! Stored row types.
//!
//! Rows are plain data as the store holds it, separate from the mutable
//! domain records in [`crate::models`]. `*Values` types carry the columns a
//! caller supplies; IDs and timestamps are assigned by the store.

use chrono::{DateTime, Utc};

use jungle_core::{CategoryId, Email, ProductId, UserId};

/// A stored category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns written when inserting or updating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductValues {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub quantity: i32,
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns written when inserting or updating a user.
///
/// Only the password digest is ever handed to the store.
#[derive(Clone, PartialEq, Eq)]
pub struct UserValues {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_digest: String,
}

/// A stored user.
///
/// Implements `Debug` manually to redact the password digest.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for UserValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_digest", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for UserRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRow")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_digest", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
