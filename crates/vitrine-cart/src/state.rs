//! Cart state and line items.

use serde::{Deserialize, Serialize};
use vitrine_catalog::Product;

/// One cart entry: a product snapshot and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product taken at add time.
    pub product: Product,
    /// Number of units. Always `>= 1` for a line present in the cart.
    pub quantity: u64,
}

impl CartLine {
    /// Price contribution of this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Cart contents plus derived totals.
///
/// Invariant: `total` and `item_count` equal the fold over `lines` at all
/// times, and at most one line exists per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Whether the cart panel is open. Orthogonal to line contents.
    pub is_open: bool,
    /// Sum of `price × quantity` over lines.
    pub total: f64,
    /// Sum of quantities over lines.
    pub item_count: u64,
}

impl CartState {
    /// Empty, closed cart. Created once per session, never persisted.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
            total: 0.0,
            item_count: 0,
        }
    }

    /// The line for a product id, if present.
    pub fn line(&self, id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Recompute the derived totals from the line sequence.
    pub(crate) fn with_recomputed_totals(mut self) -> Self {
        self.total = self.lines.iter().map(CartLine::line_total).sum();
        self.item_count = self.lines.iter().map(|l| l.quantity).sum();
        self
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
