//! Chops & Chips Admin library.
//!
//! The staff-facing half of the application: menu management, the live order
//! board, site theming, and admin sign-in. Like the storefront, everything
//! here is pass-through orchestration over the backend contracts - the panel
//! holds no state machines of its own beyond "display what came back".

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
