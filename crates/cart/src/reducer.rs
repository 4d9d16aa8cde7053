//! Pure mutation rules for the cart aggregate.

use chops_and_chips_core::{CartLine, FoodId, Quantity};

use crate::aggregate::CartAggregate;

/// One cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add a selection. Merges with an existing line for the same item by
    /// summing quantities; the existing line's name, price, and image win.
    Add(CartLine),
    /// Set a line's quantity. Non-positive values remove the line; an unknown
    /// ID is a no-op. Carried as a raw integer so the UI's decrement button
    /// can express "below one" without constructing an invalid [`Quantity`].
    SetQuantity {
        /// Target line.
        id: FoodId,
        /// Requested count; `<= 0` deletes.
        quantity: i64,
    },
    /// Remove a line. Unknown ID is a no-op.
    Remove(FoodId),
    /// Empty the cart.
    Clear,
}

/// Apply one action, producing the next aggregate.
///
/// Pure: no storage, no logging, no clock. Everything the cart is allowed to
/// do is in this function, which is what keeps the rules testable without a
/// storage stub.
#[must_use]
pub fn apply(mut aggregate: CartAggregate, action: CartAction) -> CartAggregate {
    match action {
        CartAction::Add(incoming) => {
            let lines = aggregate.lines_mut();
            if let Some(existing) = lines.iter_mut().find(|line| line.id == incoming.id) {
                existing.quantity = existing.quantity.saturating_add(incoming.quantity);
            } else {
                lines.push(incoming);
            }
        }
        CartAction::SetQuantity { id, quantity } => {
            if quantity <= 0 {
                aggregate.lines_mut().retain(|line| line.id != id);
            } else if let Some(line) = aggregate
                .lines_mut()
                .iter_mut()
                .find(|line| line.id == id)
            {
                let count = u32::try_from(quantity).unwrap_or(u32::MAX);
                if let Ok(valid) = Quantity::new(count) {
                    line.quantity = valid;
                }
            }
        }
        CartAction::Remove(id) => {
            aggregate.lines_mut().retain(|line| line.id != id);
        }
        CartAction::Clear => aggregate = CartAggregate::new(),
    }
    aggregate
}
