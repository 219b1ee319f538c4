//! Category records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jungle_core::CategoryId;

use crate::db::{CategoryRow, RepositoryError, Store};
use crate::error::RecordError;
use crate::models::product::{NewProduct, Product};

/// A persisted catalog category. Owns many [`Product`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Persist a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn create<S: Store + ?Sized>(store: &mut S, name: &str) -> Result<Self, RepositoryError> {
        Ok(store.insert_category(name)?.into())
    }

    /// Load a persisted category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn find<S: Store + ?Sized>(
        store: &S,
        id: CategoryId,
    ) -> Result<Option<Self>, RepositoryError> {
        Ok(store.find_category(id)?.map(Self::from))
    }

    /// Build an unsaved product in this category.
    ///
    /// Any `category_id` in `attrs` is replaced by this category's ID.
    #[must_use]
    pub fn build_product(&self, attrs: NewProduct) -> Product {
        Product::new(NewProduct {
            category_id: Some(self.id),
            ..attrs
        })
    }

    /// Build a product in this category and try to save it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Repository` if the store fails.
    pub fn create_product<S: Store + ?Sized>(
        &self,
        store: &mut S,
        attrs: NewProduct,
    ) -> Result<Product, RecordError> {
        let mut product = self.build_product(attrs);
        product.save(store)?;
        Ok(product)
    }

    /// Persisted products in this category, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn products<S: Store + ?Sized>(&self, store: &S) -> Result<Vec<Product>, RepositoryError> {
        Ok(store
            .products_for_category(self.id)?
            .into_iter()
            .map(Product::from)
            .collect())
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::db::MemoryStore;

    use super::*;

    #[test]
    fn test_build_product_sets_category() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "test-category").unwrap();
        let other = Category::create(&mut store, "other").unwrap();

        let product = category.build_product(NewProduct {
            category_id: Some(other.id),
            ..NewProduct::default()
        });

        assert_eq!(product.category_id, Some(category.id));
        assert!(!product.is_persisted());
    }

    #[test]
    fn test_products_lists_only_own_products() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "test-category").unwrap();
        let other = Category::create(&mut store, "other").unwrap();
        let attrs = NewProduct {
            name: Some("testing".to_owned()),
            price_cents: Some(1000),
            quantity: Some(1),
            ..NewProduct::default()
        };

        category.create_product(&mut store, attrs.clone()).unwrap();
        other.create_product(&mut store, attrs).unwrap();

        let products = category.products(&store).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category_id, Some(category.id));
    }

    #[test]
    fn test_find_roundtrip() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "test-category").unwrap();

        assert_eq!(Category::find(&store, category.id).unwrap(), Some(category));
        assert_eq!(Category::find(&store, CategoryId::new(99)).unwrap(), None);
    }
}
