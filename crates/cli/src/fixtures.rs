//! YAML fixture files.
//!
//! ```yaml
//! categories:
//!   - name: Evergreens
//!     products:
//!       - name: Giant Tea
//!         price_cents: 6499
//!         quantity: 0
//! users:
//!   - first_name: John
//!     last_name: Doe
//!     email: johndoe@email.com
//!     password: password
//!     password_confirmation: password
//! ```
//!
//! Every attribute of a product or user may be omitted; the record is then
//! rejected by validation and reported, not by the parser.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use jungle_storefront::{Category, MemoryStore, NewProduct, NewUser, RecordError, User};

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture file is not valid YAML for this layout.
    #[error("invalid fixture file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A record could not be written.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The store rejected a category.
    #[error(transparent)]
    Repository(#[from] jungle_storefront::RepositoryError),
}

/// Top-level fixture document.
#[derive(Debug, Default, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,
    #[serde(default)]
    pub users: Vec<UserFixture>,
}

/// A category and the products created in it.
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    pub name: String,
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

/// User attributes as written in a fixture file.
#[derive(Debug, Default, Deserialize)]
pub struct UserFixture {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl From<UserFixture> for NewUser {
    fn from(f: UserFixture) -> Self {
        Self {
            first_name: f.first_name,
            last_name: f.last_name,
            email: f.email,
            password: f.password.map(SecretString::from),
            password_confirmation: f.password_confirmation.map(SecretString::from),
        }
    }
}

/// A record that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Human label for the record, e.g. `product #2 in "Evergreens"`.
    pub record: String,
    /// Full validation messages.
    pub messages: Vec<String>,
}

/// Outcome of loading a fixture file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl FixtureFile {
    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Io` if the file cannot be read.
    /// Returns `FixtureError::Parse` if the YAML does not match the layout.
    pub fn read(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Parse` if the YAML does not match the layout.
    pub fn parse(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Save every record into `store` in file order.
    ///
    /// Invalid records are collected in the report and skipped.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the store fails.
    pub fn load_into(self, store: &mut MemoryStore) -> Result<LoadReport, FixtureError> {
        let mut report = LoadReport::default();

        for category_fixture in self.categories {
            let category = Category::create(store, &category_fixture.name)?;
            report.categories += 1;

            for (index, attrs) in category_fixture.products.into_iter().enumerate() {
                let product = category.create_product(store, attrs)?;
                if product.is_persisted() {
                    report.products += 1;
                } else {
                    let record = format!("product #{} in \"{}\"", index + 1, category.name);
                    warn!(%record, errors = %product.errors(), "Rejected product");
                    report.rejected.push(Rejection {
                        record,
                        messages: product.errors().full_messages(),
                    });
                }
            }
        }

        for (index, attrs) in self.users.into_iter().enumerate() {
            let user = User::create(store, attrs.into())?;
            if user.is_persisted() {
                report.users += 1;
            } else {
                let record = user.email.clone().map_or_else(
                    || format!("user #{}", index + 1),
                    |email| format!("user #{} <{email}>", index + 1),
                );
                warn!(%record, errors = %user.errors(), "Rejected user");
                report.rejected.push(Rejection {
                    record,
                    messages: user.errors().full_messages(),
                });
            }
        }

        debug!(
            categories = report.categories,
            products = report.products,
            users = report.users,
            rejected = report.rejected.len(),
            "Fixtures loaded"
        );

        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FIXTURES: &str = r#"
categories:
  - name: test-category
    products:
      - name: testing
        price_cents: 1000
        quantity: 1
      - name: no-price
        quantity: 3
users:
  - first_name: John
    last_name: Doe
    email: johndoe@email.com
    password: password
    password_confirmation: password
  - first_name: Joshua
    last_name: Doe
    email: JOHNDOE@email.com
    password: "12345"
    password_confirmation: "12345"
"#;

    #[test]
    fn test_parse_layout() {
        let file = FixtureFile::parse(FIXTURES).unwrap();
        assert_eq!(file.categories.len(), 1);
        assert_eq!(file.categories[0].products.len(), 2);
        assert_eq!(file.users.len(), 2);
        assert_eq!(file.categories[0].products[1].price_cents, None);
    }

    #[test]
    fn test_empty_document_sections_default() {
        let file = FixtureFile::parse("users: []").unwrap();
        assert!(file.categories.is_empty());
        assert!(file.users.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = FixtureFile::parse("categories: 3").unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_load_reports_rejections() {
        let mut store = MemoryStore::new();
        let report = FixtureFile::parse(FIXTURES)
            .unwrap()
            .load_into(&mut store)
            .unwrap();

        assert_eq!(report.categories, 1);
        assert_eq!(report.products, 1);
        assert_eq!(report.users, 1);
        assert!(!report.is_clean());
        assert_eq!(
            report.rejected,
            vec![
                Rejection {
                    record: "product #2 in \"test-category\"".to_owned(),
                    messages: vec!["Price can't be blank".to_owned()],
                },
                Rejection {
                    record: "user #2 <JOHNDOE@email.com>".to_owned(),
                    messages: vec!["Email has already been taken".to_owned()],
                },
            ]
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = FixtureFile::read(Path::new("/nonexistent/jungle.yaml")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
