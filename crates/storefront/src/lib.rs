//! Jungle Storefront library.
//!
//! Record types for the catalog (`Category`, `Product`) and user accounts
//! (`User`), the validation rules each record must pass before it is
//! persisted, the [`db::Store`] interface records are persisted through, and
//! credential-based authentication over persisted users.
//!
//! # Modules
//!
//! - [`models`] - Mutable records with validation and save semantics
//! - [`db`] - Backing-store interface and the in-memory implementation
//! - [`services`] - Authentication
//! - [`error`] - Errors raised by strict saves

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use db::{MemoryStore, RepositoryError, Store};
pub use error::RecordError;
pub use models::{Category, NewProduct, NewUser, Product, User};
pub use services::auth::{AuthError, AuthService};
