//! Customer contact details collected at checkout.

use serde::{Deserialize, Serialize};

use super::email::Email;

/// The contact and delivery details the checkout form collects.
///
/// Captured verbatim into the order record; there is no customer account or
/// profile behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Delivery address, free-form.
    pub address: String,
    /// Contact phone number, free-form.
    pub phone: String,
}
