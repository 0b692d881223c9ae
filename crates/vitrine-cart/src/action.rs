//! Cart action vocabulary.

use serde::{Deserialize, Serialize};
use vitrine_catalog::Product;

/// An action dispatched against the cart state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product. Merges into an existing line for the
    /// same id rather than duplicating it.
    AddItem(Product),
    /// Drop the line for a product id. An absent id is a no-op.
    RemoveItem(u64),
    /// Set the quantity for a product id. Negative values clamp to zero;
    /// a resulting quantity of zero removes the line.
    UpdateQuantity {
        /// Product id of the line to update.
        id: u64,
        /// Requested quantity.
        quantity: i64,
    },
    /// Empty the cart, preserving panel visibility.
    Clear,
    /// Flip the cart panel open/closed.
    Toggle,
}
