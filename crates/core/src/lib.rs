//! Jungle Core - Shared types library.
//!
//! This crate provides common types used across all Jungle components:
//! - `storefront` - Catalog and user records, validation, authentication
//! - `cli` - Command-line tools for loading and checking fixtures
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and emails, plus
//!   the validation error collection shared by every record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
