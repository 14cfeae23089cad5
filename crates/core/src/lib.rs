//! Folio Core - Shared types library.
//!
//! This crate provides common types used across the Folio components:
//! - `server` - Portfolio JSON API and static frontend host
//! - `cli` - Command-line tools for schema setup, seeding, and reporting
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Database encoding for the ID and email types is available behind
//! the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, contact email addresses, and analytics windows

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
