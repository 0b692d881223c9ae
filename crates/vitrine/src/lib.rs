//! # Vitrine
//!
//! Client-side storefront core. Vitrine fetches a product catalog once per
//! session, validates it record by record, reveals it to the user page by
//! page as a sentinel region scrolls into view, and accumulates purchases
//! in a deterministic shopping-cart state engine.
//!
//! The two subsystems are deliberately decoupled: the feed knows nothing
//! about the cart, and the cart knows nothing about pagination. Rendering,
//! routing, and checkout live outside this core and consume it through
//! snapshots and callbacks.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vitrine::prelude::*;
//!
//! let feed = ProductFeed::new(
//!     HttpCatalogSource::new("https://shop.example.com/products.json"),
//!     FeedConfig::new(),
//! );
//! feed.load().await;
//!
//! let mut cart = CartStore::new();
//! if let Some(product) = feed.snapshot().products.first() {
//!     cart.add_item(product.clone());
//! }
//!
//! let feed_handle = feed.clone();
//! let (watch, subscription) = SentinelWatch::observe(
//!     WatchOptions::default(),
//!     WatchState { has_more: true, loading: false },
//!     move || { /* schedule feed_handle.load_more() */ },
//! );
//! ```

pub mod prelude;

// Re-export member crates
pub use vitrine_cart;
pub use vitrine_catalog;
pub use vitrine_data;
pub use vitrine_feed;

// Re-export the core types at the top level for convenience
pub use vitrine_cart::{CartAction, CartState, CartStore};
pub use vitrine_catalog::{validate, Catalog, CatalogError, Product};
pub use vitrine_data::{CatalogSource, FetchError, HttpCatalogSource};
pub use vitrine_feed::{FeedConfig, FeedSnapshot, ProductFeed, SentinelWatch};
