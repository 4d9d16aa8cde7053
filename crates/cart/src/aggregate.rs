//! The cart aggregate: every current line, treated as one unit.

use chops_and_chips_core::{CartLine, FoodId, Price};
use serde::{Deserialize, Serialize};

/// The full cart: an ordered collection of [`CartLine`], insertion order
/// preserved for display.
///
/// Invariant: at most one line per distinct food ID. The reducer maintains
/// this by merging quantities when an already-present item is added.
///
/// The total is derived, never stored - see [`CartAggregate::total`].
///
/// Serializes as a bare JSON array of lines, which is exactly the document
/// the web client keeps under its local-storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CartAggregate {
    lines: Vec<CartLine>,
}

impl CartAggregate {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if the item is in the cart.
    #[must_use]
    pub fn line(&self, id: &FoodId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The cart total: Σ `price` × `quantity` over all lines.
    ///
    /// Recomputed on every read; an empty cart totals zero.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<CartLine> {
        &mut self.lines
    }
}
