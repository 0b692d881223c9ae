//! Product and rating types.

use serde::{Deserialize, Serialize};

/// A product accepted into the catalog.
///
/// Immutable once validated. The cart stores full snapshots of these, so a
/// later catalog refresh never rewrites what a line was priced at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier within a catalog fetch.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Unit price. Finite and positive for every validated product.
    pub price: f64,
    /// Full description, if provided.
    pub description: Option<String>,
    /// Image URI, if provided.
    pub image: Option<String>,
    /// Aggregate customer rating, if provided and well-formed.
    pub rating: Option<Rating>,
}

impl Product {
    /// Check the catalog validity predicate: positive id, finite positive price.
    ///
    /// Everything [`validate`](crate::validate) accepts satisfies this; the
    /// check exists for values constructed elsewhere, e.g. at the cart
    /// boundary.
    pub fn is_valid(&self) -> bool {
        self.id > 0 && self.price.is_finite() && self.price > 0.0
    }
}

/// Aggregate rating attached to a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u64,
}
