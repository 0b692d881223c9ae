//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use vitrine::prelude::*;
//! ```
//!
//! This imports all commonly used items:
//! - Catalog: `Product`, `Catalog`, `validate`
//! - Cart: `CartStore`, `CartState`, `CartAction`
//! - Data: `CatalogSource`, `HttpCatalogSource`, `StaticSource`
//! - Feed: `ProductFeed`, `FeedConfig`, `SentinelWatch`

pub use vitrine_catalog::{validate, Catalog, CatalogError, Product, Rating};

pub use vitrine_cart::{reduce, CartAction, CartError, CartLine, CartState, CartStore};

pub use vitrine_data::{CatalogSource, FetchError, HttpCatalogSource, StaticSource};

pub use vitrine_feed::{
    FeedConfig, FeedError, FeedSnapshot, ProductFeed, RevealedWindow, SentinelWatch, Subscription,
    WatchOptions, WatchState, PAGE_SIZE,
};
