//! Unified error handling for the admin panel.

use thiserror::Error;

use chops_and_chips_core::{BackendError, EmailError};

/// Application-level error type for the admin panel.
///
/// Nothing here is fatal; the panel renders the message and stays up.
#[derive(Debug, Error)]
pub enum AppError {
    /// A managed-backend call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// The sign-in form carried an unparseable email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
