//! Checkout: package the cart into an order record and submit it.

use tracing::info;

use chops_and_chips_cart::CartStore;
use chops_and_chips_core::{CustomerDetails, OrderDraft, OrderId, OrderRepository};

use crate::error::{AppError, Result};

/// The checkout screen's single operation.
pub struct Checkout<'a, O: OrderRepository> {
    orders: &'a mut O,
}

impl<'a, O: OrderRepository> Checkout<'a, O> {
    /// A checkout over the orders collection.
    pub fn new(orders: &'a mut O) -> Self {
        Self { orders }
    }

    /// Submit the current cart as a new order.
    ///
    /// The cart's line list and derived total are packaged verbatim into the
    /// draft; the backend stamps status and creation time. The cart is
    /// cleared only after the submission succeeds, so a failed submission
    /// leaves the shopper's selections intact for a retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyCart`] if there is nothing to order, or
    /// [`AppError::Backend`] if the backend rejects the submission (the cart
    /// is left untouched in that case).
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        customer: CustomerDetails,
    ) -> Result<OrderId> {
        if cart.aggregate().is_empty() {
            return Err(AppError::EmptyCart);
        }

        let draft = OrderDraft {
            customer,
            items: cart.aggregate().lines().to_vec(),
            total: cart.total(),
        };
        let order_id = self.orders.create(draft)?;
        info!(order_id = %order_id, "order placed");

        cart.clear();
        Ok(order_id)
    }
}
