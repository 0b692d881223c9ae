//! Product catalog model and validation for Vitrine.
//!
//! The storefront fetches its catalog once per session as an untrusted JSON
//! payload. This crate filters that payload down to well-formed product
//! records and hands back an ordered, immutable [`Catalog`].

mod error;
mod product;
mod validate;

pub use error::CatalogError;
pub use product::{Product, Rating};
pub use validate::{validate, Catalog};
