//! Order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart_line::CartLine;
use super::customer::CustomerDetails;
use super::id::OrderId;
use super::price::Price;
use super::status::OrderStatus;

/// A placed order as stored in the backend orders collection.
///
/// The `items` and `total` fields are a verbatim snapshot of the cart at
/// checkout; mutating the cart afterwards never touches a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend document ID.
    pub id: OrderId,
    /// Contact and delivery details from the checkout form.
    pub customer: CustomerDetails,
    /// Snapshot of the cart lines.
    pub items: Vec<CartLine>,
    /// Snapshot of the cart total.
    pub total: Price,
    /// Current kitchen status.
    pub status: OrderStatus,
    /// Creation time, stamped by the backend.
    pub created_at: DateTime<Utc>,
}

/// What checkout submits: the backend stamps `status: pending`, the creation
/// time, and the document ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Contact and delivery details.
    pub customer: CustomerDetails,
    /// Cart lines, verbatim.
    pub items: Vec<CartLine>,
    /// Cart total, verbatim.
    pub total: Price,
}
