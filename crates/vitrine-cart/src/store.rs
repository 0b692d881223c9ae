//! Cart store façade.

use vitrine_catalog::Product;

use crate::action::CartAction;
use crate::reduce::reduce;
use crate::state::CartState;

/// Owns the cart state and is its only writer.
///
/// Dispatch is synchronous and atomic with respect to other dispatches.
/// Rejected mutations are logged and swallowed so an invalid action never
/// interrupts the UI; readers see either the previous or the next state,
/// never a partial one.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create a store with an empty, closed cart.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Dispatch an action, replacing the state on success.
    pub fn dispatch(&mut self, action: CartAction) {
        match reduce(&self.state, action) {
            Ok(next) => self.state = next,
            Err(err) => tracing::warn!(%err, "rejected cart mutation"),
        }
    }

    /// Add one unit of a product.
    pub fn add_item(&mut self, product: Product) {
        self.dispatch(CartAction::AddItem(product));
    }

    /// Remove the line for a product id.
    pub fn remove_item(&mut self, id: u64) {
        self.dispatch(CartAction::RemoveItem(id));
    }

    /// Set the quantity for a product id.
    pub fn update_quantity(&mut self, id: u64, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Flip the cart panel open/closed.
    pub fn toggle(&mut self) {
        self.dispatch(CartAction::Toggle);
    }
}
