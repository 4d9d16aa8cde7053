//! Unified error handling for the storefront.
//!
//! Screens return `Result<T, AppError>`; every failure here degrades to a
//! message on the page, never a crash of the surrounding application.

use thiserror::Error;

use chops_and_chips_core::BackendError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A managed-backend call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Checkout was attempted with an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
