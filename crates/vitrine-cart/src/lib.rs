//! Shopping cart state engine for Vitrine.
//!
//! A pure state-transition function over a small action vocabulary, plus a
//! store façade that dispatches actions and exposes the derived read state:
//! line items, running total, item count.
//!
//! The derived quantities are recomputed from the authoritative line
//! sequence after every mutating transition; they are never patched
//! incrementally, so they cannot drift from the lines under any
//! interleaving of actions.

mod action;
mod error;
mod reduce;
mod state;
mod store;

pub use action::CartAction;
pub use error::CartError;
pub use reduce::reduce;
pub use state::{CartLine, CartState};
pub use store::CartStore;
