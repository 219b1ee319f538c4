//! Product records.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use jungle_core::{CategoryId, CurrencyCode, ErrorKind, Errors, Price, ProductId, is_blank};

use crate::db::{ProductRow, ProductValues, RepositoryError, Store};
use crate::error::RecordError;
use crate::models::category::Category;

/// Attributes for building a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity: Option<i32>,
    pub category_id: Option<CategoryId>,
}

/// A catalog product belonging to exactly one [`Category`].
///
/// Attributes are public and may be reassigned freely; nothing is checked
/// until [`Product::is_valid`] or a save runs the validations.
#[derive(Debug, Clone)]
pub struct Product {
    id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity: Option<i32>,
    pub category_id: Option<CategoryId>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    errors: Errors,
}

impl Product {
    /// Build an unsaved product.
    #[must_use]
    pub fn new(attrs: NewProduct) -> Self {
        Self {
            id: None,
            name: attrs.name,
            description: attrs.description,
            price_cents: attrs.price_cents,
            quantity: attrs.quantity,
            category_id: attrs.category_id,
            created_at: None,
            updated_at: None,
            errors: Errors::new(),
        }
    }

    /// Build a product and try to save it.
    ///
    /// The product is returned whether or not it saved; check
    /// [`Product::is_persisted`] and [`Product::errors`].
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Repository` if the store fails.
    pub fn create<S: Store + ?Sized>(store: &mut S, attrs: NewProduct) -> Result<Self, RecordError> {
        let mut product = Self::new(attrs);
        product.save(store)?;
        Ok(product)
    }

    /// Load a persisted product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn find<S: Store + ?Sized>(
        store: &S,
        id: ProductId,
    ) -> Result<Option<Self>, RepositoryError> {
        Ok(store.find_product(id)?.map(Self::from))
    }

    #[must_use]
    pub const fn id(&self) -> Option<ProductId> {
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

    /// Price derived from `price_cents`.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price_cents
            .map(|cents| Price::from_cents(cents, CurrencyCode::USD))
    }

    /// Resolve the category reference.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub fn category<S: Store + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Option<Category>, RepositoryError> {
        match self.category_id {
            Some(id) => Category::find(store, id),
            None => Ok(None),
        }
    }

    /// Errors from the most recent validation run.
    #[must_use]
    pub const fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Run every rule against the current attributes.
    ///
    /// Each missing attribute is reported independently. A category
    /// reference that does not resolve in `store` counts as missing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the category lookup fails.
    pub fn validate<S: Store + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Errors, RepositoryError> {
        let mut errors = Errors::new();

        if is_blank(self.name.as_deref()) {
            errors.add("name", ErrorKind::Blank);
        }
        if self.price_cents.is_none() {
            errors.add("price", ErrorKind::Blank);
        }
        if self.quantity.is_none() {
            errors.add("quantity", ErrorKind::Blank);
        }
        if self.category(store)?.is_none() {
            errors.add("category", ErrorKind::Blank);
        }

        Ok(errors)
    }

    /// Validate and keep the result on the record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the category lookup fails.
    pub fn is_valid<S: Store + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<bool, RepositoryError> {
        self.errors = self.validate(store)?;
        Ok(self.errors.is_empty())
    }

    /// Validate, then insert (new) or update (persisted).
    ///
    /// Returns `Ok(false)` when validation fails; the reasons are on
    /// [`Product::errors`].
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Repository` if the store fails.
    pub fn save<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<bool, RecordError> {
        if !self.is_valid(&*store)? {
            debug!(errors = %self.errors, "Product failed validation");
            return Ok(false);
        }

        let Some(values) = self.values() else {
            return Ok(false);
        };

        let row = match self.id {
            Some(id) => store.update_product(id, values)?,
            None => store.insert_product(values)?,
        };

        *self = Self::from(row);
        Ok(true)
    }

    /// Save, treating a validation failure as an error.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Invalid` if validation fails.
    /// Returns `RecordError::Repository` if the store fails.
    pub fn save_strict<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<(), RecordError> {
        if self.save(store)? {
            Ok(())
        } else {
            Err(RecordError::Invalid(self.errors.clone()))
        }
    }

    fn values(&self) -> Option<ProductValues> {
        Some(ProductValues {
            category_id: self.category_id?,
            name: self.name.clone()?,
            description: self.description.clone(),
            price_cents: self.price_cents?,
            quantity: self.quantity?,
        })
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            price_cents: Some(row.price_cents),
            quantity: Some(row.quantity),
            category_id: Some(row.category_id),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            errors: Errors::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::db::MemoryStore;

    use super::*;

    fn valid_attrs(category_id: CategoryId) -> NewProduct {
        NewProduct {
            name: Some("testing".to_owned()),
            price_cents: Some(1000),
            quantity: Some(1),
            category_id: Some(category_id),
            ..NewProduct::default()
        }
    }

    #[test]
    fn test_price_from_cents() {
        let product = Product::new(NewProduct {
            price_cents: Some(1999),
            ..NewProduct::default()
        });
        assert_eq!(product.price().unwrap().to_string(), "$19.99");
        assert!(Product::new(NewProduct::default()).price().is_none());
    }

    #[test]
    fn test_all_missing_attributes_reported() {
        let store = MemoryStore::new();
        let errors = Product::new(NewProduct::default()).validate(&store).unwrap();

        assert_eq!(
            errors.full_messages(),
            vec![
                "Name can't be blank",
                "Price can't be blank",
                "Quantity can't be blank",
                "Category can't be blank",
            ]
        );
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "c").unwrap();
        let mut product = Product::new(NewProduct {
            name: Some("   ".to_owned()),
            ..valid_attrs(category.id)
        });

        assert!(!product.is_valid(&store).unwrap());
        assert_eq!(product.errors().full_messages(), vec!["Name can't be blank"]);
    }

    #[test]
    fn test_dangling_category_is_blank() {
        let store = MemoryStore::new();
        let mut product = Product::new(valid_attrs(CategoryId::new(12)));

        assert!(!product.is_valid(&store).unwrap());
        assert!(product.errors().include("Category can't be blank"));
    }

    #[test]
    fn test_zero_quantity_is_present() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "c").unwrap();
        let mut product = Product::new(NewProduct {
            quantity: Some(0),
            ..valid_attrs(category.id)
        });

        assert!(product.is_valid(&store).unwrap());
    }

    #[test]
    fn test_save_assigns_id_and_timestamps() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "c").unwrap();
        let mut product = Product::new(valid_attrs(category.id));

        assert!(product.save(&mut store).unwrap());
        assert!(product.is_persisted());
        assert!(product.created_at().is_some());
        assert_eq!(store.product_count(), 1);
    }

    #[test]
    fn test_invalid_save_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let mut product = Product::new(NewProduct::default());

        assert!(!product.save(&mut store).unwrap());
        assert!(!product.is_persisted());
        assert_eq!(store.product_count(), 0);
        assert_eq!(product.errors().len(), 4);
    }

    #[test]
    fn test_save_updates_persisted_product() {
        let mut store = MemoryStore::new();
        let category = Category::create(&mut store, "c").unwrap();
        let mut product = Product::create(&mut store, valid_attrs(category.id)).unwrap();
        let id = product.id().unwrap();

        product.quantity = Some(5);
        assert!(product.save(&mut store).unwrap());

        assert_eq!(product.id(), Some(id));
        assert_eq!(store.product_count(), 1);
        assert_eq!(
            Product::find(&store, id).unwrap().unwrap().quantity,
            Some(5)
        );
    }

    #[test]
    fn test_save_strict_reports_errors() {
        let mut store = MemoryStore::new();
        let mut product = Product::new(NewProduct {
            name: Some("testing".to_owned()),
            price_cents: Some(100),
            quantity: Some(10),
            ..NewProduct::default()
        });

        let err = product.save_strict(&mut store).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Category can't be blank"
        );
    }
}
