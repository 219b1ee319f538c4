//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Credential authentication and password hashing

pub mod auth;
