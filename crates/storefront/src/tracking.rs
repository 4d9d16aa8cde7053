//! Order tracking for the "where's my food" page.

use chops_and_chips_core::{Order, OrderId, OrderRepository};

use crate::error::Result;

/// Read-side view over a single order.
pub struct Tracking<'a, O: OrderRepository> {
    orders: &'a O,
}

impl<'a, O: OrderRepository> Tracking<'a, O> {
    /// A tracking view over the orders collection.
    pub const fn new(orders: &'a O) -> Self {
        Self { orders }
    }

    /// The order the shopper is tracking, or `None` for an unknown ID (the
    /// page renders that as "order not found", not as a failure).
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the order cannot be
    /// read.
    pub fn order(&self, id: &OrderId) -> Result<Option<Order>> {
        Ok(self.orders.get(id)?)
    }
}
