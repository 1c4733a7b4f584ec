//! FashionShop Core - Shared types library.
//!
//! This crate provides the domain types used across FashionShop components:
//! - `storefront` - Public-facing e-commerce site
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog products, the shopping cart, and rating rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
