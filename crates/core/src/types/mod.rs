//! Core types for Jungle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod blank;
pub mod email;
pub mod errors;
pub mod id;
pub mod price;

pub use blank::is_blank;
pub use email::{Email, EmailError};
pub use errors::{ErrorKind, Errors, FieldError};
pub use id::*;
pub use price::{CurrencyCode, Price};
