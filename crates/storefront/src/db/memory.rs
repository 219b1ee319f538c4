//! In-process [`Store`] implementation.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::debug;

use jungle_core::{CategoryId, ProductId, UserId};

use super::{
    CategoryRow, ProductRow, ProductValues, RepositoryError, Store, UserRow, UserValues,
};

/// Ordered in-memory tables with the same constraints a relational schema
/// for these records would carry:
///
/// - IDs are assigned per table, starting at 1, never reused
/// - `users` has a unique index on the normalized email
/// - `products.category_id` must reference an existing category
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: BTreeMap<CategoryId, CategoryRow>,
    products: BTreeMap<ProductId, ProductRow>,
    users: BTreeMap<UserId, UserRow>,
    user_email_index: HashMap<String, UserId>,
    last_category_id: i32,
    last_product_id: i32,
    last_user_id: i32,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of stored products.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of stored users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn ensure_category(&self, id: CategoryId) -> Result<(), RepositoryError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(RepositoryError::Conflict(format!(
                "category {id} does not exist"
            )))
        }
    }
}

fn next_id(last: &mut i32) -> i32 {
    *last += 1;
    *last
}

impl Store for MemoryStore {
    fn insert_category(&mut self, name: &str) -> Result<CategoryRow, RepositoryError> {
        let id = CategoryId::new(next_id(&mut self.last_category_id));
        let now = Utc::now();
        let row = CategoryRow {
            id,
            name: name.to_owned(),
            created_at: now,
            updated_at: now,
        };

        self.categories.insert(id, row.clone());
        debug!(category_id = %id, "Inserted category");

        Ok(row)
    }

    fn find_category(&self, id: CategoryId) -> Result<Option<CategoryRow>, RepositoryError> {
        Ok(self.categories.get(&id).cloned())
    }

    fn insert_product(&mut self, values: ProductValues) -> Result<ProductRow, RepositoryError> {
        self.ensure_category(values.category_id)?;

        let id = ProductId::new(next_id(&mut self.last_product_id));
        let now = Utc::now();
        let row = ProductRow {
            id,
            category_id: values.category_id,
            name: values.name,
            description: values.description,
            price_cents: values.price_cents,
            quantity: values.quantity,
            created_at: now,
            updated_at: now,
        };

        self.products.insert(id, row.clone());
        debug!(product_id = %id, category_id = %row.category_id, "Inserted product");

        Ok(row)
    }

    fn update_product(
        &mut self,
        id: ProductId,
        values: ProductValues,
    ) -> Result<ProductRow, RepositoryError> {
        self.ensure_category(values.category_id)?;

        let row = self
            .products
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("product {id}")))?;

        row.category_id = values.category_id;
        row.name = values.name;
        row.description = values.description;
        row.price_cents = values.price_cents;
        row.quantity = values.quantity;
        row.updated_at = Utc::now();

        debug!(product_id = %id, "Updated product");

        Ok(row.clone())
    }

    fn find_product(&self, id: ProductId) -> Result<Option<ProductRow>, RepositoryError> {
        Ok(self.products.get(&id).cloned())
    }

    fn products_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ProductRow>, RepositoryError> {
        Ok(self
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    fn insert_user(&mut self, values: UserValues) -> Result<UserRow, RepositoryError> {
        let key = values.email.normalized();
        if self.user_email_index.contains_key(&key) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let id = UserId::new(next_id(&mut self.last_user_id));
        let now = Utc::now();
        let row = UserRow {
            id,
            first_name: values.first_name,
            last_name: values.last_name,
            email: values.email,
            password_digest: values.password_digest,
            created_at: now,
            updated_at: now,
        };

        self.user_email_index.insert(key, id);
        self.users.insert(id, row.clone());
        debug!(user_id = %id, "Inserted user");

        Ok(row)
    }

    fn update_user(&mut self, id: UserId, values: UserValues) -> Result<UserRow, RepositoryError> {
        let new_key = values.email.normalized();
        if self
            .user_email_index
            .get(&new_key)
            .is_some_and(|owner| *owner != id)
        {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let row = self
            .users
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))?;

        let old_key = row.email.normalized();
        if old_key != new_key {
            self.user_email_index.remove(&old_key);
            self.user_email_index.insert(new_key, id);
        }

        row.first_name = values.first_name;
        row.last_name = values.last_name;
        row.email = values.email;
        row.password_digest = values.password_digest;
        row.updated_at = Utc::now();

        debug!(user_id = %id, "Updated user");

        Ok(row.clone())
    }

    fn find_user(&self, id: UserId) -> Result<Option<UserRow>, RepositoryError> {
        Ok(self.users.get(&id).cloned())
    }

    fn find_user_by_email(
        &self,
        normalized_email: &str,
    ) -> Result<Option<UserRow>, RepositoryError> {
        let Some(id) = self.user_email_index.get(normalized_email) else {
            return Ok(None);
        };

        self.users
            .get(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!("email index points at missing user {id}"))
            })
    }

    fn email_taken(
        &self,
        normalized_email: &str,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .user_email_index
            .get(normalized_email)
            .is_some_and(|owner| Some(*owner) != except))
    }
}
