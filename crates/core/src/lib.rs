//! Vitrine Core - Shared types library.
//!
//! This crate provides common types used across all Vitrine components:
//! - `catalog` - Catalog server (proxy endpoints, store state, derived views)
//! - `integration-tests` - End-to-end tests against the catalog router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart items, themes, filter criteria, view pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
