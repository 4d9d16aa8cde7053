//! The live order board: incoming orders, newest first, with status buttons.

use tracing::info;

use chops_and_chips_core::{Order, OrderId, OrderRepository, OrderStatus};

use crate::error::Result;

/// The order board screen's operations.
pub struct OrderBoard<'a, O: OrderRepository> {
    orders: &'a mut O,
}

impl<'a, O: OrderRepository> OrderBoard<'a, O> {
    /// A board over the orders collection.
    pub fn new(orders: &'a mut O) -> Self {
        Self { orders }
    }

    /// All orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the collection cannot
    /// be read.
    pub fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.list()?)
    }

    /// Move one order to `status`.
    ///
    /// The board offers every status as a button (the current one disabled),
    /// so any transition the kitchen asks for is applied as-is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the order does not
    /// exist or the write is rejected.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<()> {
        self.orders.set_status(id, status)?;
        info!(order_id = %id, status = %status, "order status updated");
        Ok(())
    }
}
