//! Core types for Chops & Chips.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart_line;
pub mod customer;
pub mod email;
pub mod food;
pub mod id;
pub mod order;
pub mod price;
pub mod quantity;
pub mod status;
pub mod theme;

pub use cart_line::CartLine;
pub use customer::CustomerDetails;
pub use email::{Email, EmailError};
pub use food::{FoodDraft, FoodItem};
pub use id::*;
pub use order::{Order, OrderDraft};
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
pub use status::OrderStatus;
pub use theme::{ThemeFont, ThemeSettings};
