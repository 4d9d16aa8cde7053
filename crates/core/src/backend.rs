//! Contracts for the managed-backend collaborators.
//!
//! Persistence, authentication, and file storage are delegated to an external
//! managed backend. This module pins down the only surface the rest of the
//! workspace is allowed to see: synchronous repository traits over the
//! document collections (`foods`, `orders`, `theme`) and the identity
//! service. The SDK implementing them lives outside this repository; tests
//! use in-memory doubles.
//!
//! All operations run to completion on the single UI thread, so the traits
//! are synchronous and mutation takes `&mut self`.

use crate::types::{
    Email, FoodDraft, FoodId, FoodItem, Order, OrderDraft, OrderId, OrderStatus, ThemeSettings,
};

/// Errors surfaced by a backend collaborator.
#[derive(thiserror::Error, Debug, Clone)]
pub enum BackendError {
    /// The backend could not be reached or answered with a transport error.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// The referenced document does not exist.
    #[error("document not found: {0}")]
    NotFound(String),
    /// The caller is not allowed to perform the operation.
    #[error("permission denied: {0}")]
    Denied(String),
    /// A stored document could not be decoded into its domain record.
    #[error("malformed document {id}: {reason}")]
    Malformed {
        /// Document ID.
        id: String,
        /// Decoder diagnostic.
        reason: String,
    },
}

/// The `foods` collection: the menu catalog.
pub trait FoodRepository {
    /// Create a menu item; the backend mints and returns the document ID.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend rejects the write.
    fn create(&mut self, draft: FoodDraft) -> Result<FoodId, BackendError>;

    /// List every menu item in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the collection cannot be read.
    fn list(&self) -> Result<Vec<FoodItem>, BackendError>;

    /// Replace the writable fields of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if no document has this ID.
    fn update(&mut self, id: &FoodId, draft: FoodDraft) -> Result<(), BackendError>;

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if no document has this ID.
    fn delete(&mut self, id: &FoodId) -> Result<(), BackendError>;
}

/// The `orders` collection.
pub trait OrderRepository {
    /// Create an order from a checkout draft. The backend stamps
    /// `status: pending` and the creation time, and mints the document ID.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend rejects the write.
    fn create(&mut self, draft: OrderDraft) -> Result<OrderId, BackendError>;

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the collection cannot be read.
    fn list(&self) -> Result<Vec<Order>, BackendError>;

    /// Fetch one order, or `None` if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport or decode failure; an unknown ID
    /// is `Ok(None)`, not an error.
    fn get(&self, id: &OrderId) -> Result<Option<Order>, BackendError>;

    /// Overwrite one order's status.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if no document has this ID.
    fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), BackendError>;
}

/// The `theme` collection, reduced to its contract: save the current settings
/// and load the most recently saved ones.
pub trait ThemeRepository {
    /// Persist the settings as the current site theme.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend rejects the write.
    fn save(&mut self, settings: ThemeSettings) -> Result<(), BackendError>;

    /// Load the current site theme; `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport or decode failure.
    fn load(&self) -> Result<Option<ThemeSettings>, BackendError>;
}

/// An authenticated admin, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    /// Identity-service user ID.
    pub uid: String,
    /// Sign-in email.
    pub email: Email,
}

/// The identity/credential service guarding the admin panel.
pub trait IdentityGateway {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Denied`] for bad credentials, other variants
    /// for transport failures.
    fn sign_in(&mut self, email: &Email, password: &str) -> Result<AdminIdentity, BackendError>;

    /// Sign the current admin out. Signing out while signed out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure.
    fn sign_out(&mut self) -> Result<(), BackendError>;

    /// The currently signed-in admin, if any.
    fn current(&self) -> Option<&AdminIdentity>;
}
