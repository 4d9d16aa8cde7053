//! Chops & Chips Storefront library.
//!
//! The shopper-facing half of the application: browse the menu, keep a cart,
//! check out, and track the resulting order. Every screen here is
//! pass-through orchestration over the backend contracts in
//! `chops-and-chips-core` plus the cart store in `chops-and-chips-cart` - it
//! fetches, holds the result in view state, and re-renders. The rendering
//! shell itself lives outside this repository.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod tracking;
