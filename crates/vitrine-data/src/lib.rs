//! Catalog data sources for Vitrine.
//!
//! The storefront performs exactly one read-only fetch of the product
//! payload per session, and again on retry. This crate provides the
//! capability seam for that fetch — the [`CatalogSource`] trait — plus the
//! transport error taxonomy and two implementations: an HTTP source for
//! the fixed remote endpoint and an in-memory source for development and
//! tests.
//!
//! Sources return the decoded JSON payload unvalidated; filtering it down
//! to well-formed products is the catalog crate's concern.

mod error;
mod source;

pub use error::FetchError;
pub use source::{CatalogSource, HttpCatalogSource, StaticSource};
