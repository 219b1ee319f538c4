//! Domain records.
//!
//! Records are mutable in-memory values with Rails-style lifecycle: build,
//! assign attributes, validate, save. Validation never fails with an error;
//! it collects human-readable messages on the record instead.

pub mod category;
pub mod product;
pub mod user;

pub use category::Category;
pub use product::{NewProduct, Product};
pub use user::{MIN_PASSWORD_LENGTH, NewUser, User};
