//! Cart error types.

use thiserror::Error;

/// A malformed cart mutation.
///
/// Rejected mutations never surface to the user as failures; the store
/// logs them and leaves the state unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    /// Product ids are positive; zero marks a value built outside validation.
    #[error("invalid product data provided to cart: id 0")]
    ZeroProductId,

    /// Price must be a finite, positive number.
    #[error("cannot add product {id} with invalid price {price} to cart")]
    NonPositivePrice {
        /// Id of the offending product.
        id: u64,
        /// The rejected price.
        price: f64,
    },
}
