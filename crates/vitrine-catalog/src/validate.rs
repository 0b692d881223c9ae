//! Payload validation: untrusted JSON in, immutable catalog out.

use serde_json::Value;

use crate::error::CatalogError;
use crate::product::{Product, Rating};

/// The full validated product set for a session.
///
/// Ordered as received and immutable after validation. Every element
/// satisfies the product validity predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The products, in payload order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product at a position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Iterate the products in payload order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

/// Validate a fetched payload into a [`Catalog`].
///
/// Fails with [`CatalogError::InvalidFormat`] unless the payload is an
/// array. Records failing the validity predicate (positive integer id,
/// string title, finite positive price) are dropped without repair. Fails
/// with [`CatalogError::EmptyCatalog`] when nothing survives filtering.
///
/// Pure function of its input; the only side effect is a debug log per
/// dropped record.
pub fn validate(raw: &Value) -> Result<Catalog, CatalogError> {
    let records = raw.as_array().ok_or(CatalogError::InvalidFormat)?;

    let mut products = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match parse_record(record) {
            Some(product) => products.push(product),
            None => tracing::debug!(index, "dropping malformed product record"),
        }
    }

    if products.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    Ok(Catalog { products })
}

fn parse_record(record: &Value) -> Option<Product> {
    let obj = record.as_object()?;

    let id = obj.get("id")?.as_u64().filter(|id| *id > 0)?;
    let title = obj.get("title")?.as_str()?.to_string();
    let price = obj
        .get("price")?
        .as_f64()
        .filter(|p| p.is_finite() && *p > 0.0)?;

    Some(Product {
        id,
        title,
        price,
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .map(String::from),
        image: obj.get("image").and_then(Value::as_str).map(String::from),
        rating: obj.get("rating").and_then(parse_rating),
    })
}

// A malformed rating drops to None; it never invalidates the record.
fn parse_rating(value: &Value) -> Option<Rating> {
    let obj = value.as_object()?;
    let rate = obj
        .get("rate")?
        .as_f64()
        .filter(|r| (0.0..=5.0).contains(r))?;
    let count = obj.get("count")?.as_u64()?;
    Some(Rating { rate, count })
}
