//! Paginated product feed for Vitrine.
//!
//! Eagerly fetches and validates the catalog, then reveals it page by page.
//! Page advances are triggered by sentinel visibility rather than explicit
//! user action, with guards against re-entrant or redundant loads: an
//! in-flight guard serializes advances, and an edge-triggered viewport
//! watch fires the callback once per visibility transition.

mod error;
mod feed;
mod viewport;
mod window;

pub use error::FeedError;
pub use feed::{FeedConfig, FeedSnapshot, ProductFeed};
pub use viewport::{SentinelWatch, Subscription, WatchOptions, WatchState};
pub use window::{RevealedWindow, PAGE_SIZE};
