//! The cart state-transition function.

use crate::action::CartAction;
use crate::error::CartError;
use crate::state::{CartLine, CartState};

/// Apply one action to a cart state, producing the next state.
///
/// Pure: the input state is untouched, and the result's derived totals are
/// recomputed from its line sequence. A rejected mutation returns an error
/// and implies no state change; the caller decides whether that error is
/// worth more than a log line.
pub fn reduce(state: &CartState, action: CartAction) -> Result<CartState, CartError> {
    match action {
        CartAction::AddItem(product) => {
            if product.id == 0 {
                return Err(CartError::ZeroProductId);
            }
            if !product.price.is_finite() || product.price <= 0.0 {
                return Err(CartError::NonPositivePrice {
                    id: product.id,
                    price: product.price,
                });
            }

            let mut next = state.clone();
            match next.lines.iter_mut().find(|l| l.product.id == product.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(1),
                None => next.lines.push(CartLine {
                    product,
                    quantity: 1,
                }),
            }
            Ok(next.with_recomputed_totals())
        }

        CartAction::RemoveItem(id) => {
            let mut next = state.clone();
            next.lines.retain(|l| l.product.id != id);
            Ok(next.with_recomputed_totals())
        }

        CartAction::UpdateQuantity { id, quantity } => {
            let quantity = quantity.max(0) as u64;
            let mut next = state.clone();
            if let Some(line) = next.lines.iter_mut().find(|l| l.product.id == id) {
                line.quantity = quantity;
            }
            next.lines.retain(|l| l.quantity > 0);
            Ok(next.with_recomputed_totals())
        }

        CartAction::Clear => Ok(CartState {
            is_open: state.is_open,
            ..CartState::new()
        }),

        CartAction::Toggle => {
            let mut next = state.clone();
            next.is_open = !next.is_open;
            Ok(next)
        }
    }
}
