//! Chops & Chips Core - Shared types library.
//!
//! This crate provides common types used across all Chops & Chips components:
//! - `cart` - The shopper's cart store
//! - `storefront` - Public-facing ordering flow
//! - `admin` - Administration panel (menu, orders, theming)
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no network access,
//! no storage. This keeps it lightweight and allows it to be used anywhere.
//! The managed backend (document store, identity service) is reachable only
//! through the contracts in [`backend`]; the SDK that fulfills them lives
//! outside this repository.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities,
//!   emails, and statuses, plus the domain records built from them
//! - [`backend`] - Traits describing the managed-backend collaborators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod types;

pub use backend::*;
pub use types::*;
