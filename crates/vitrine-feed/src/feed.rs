//! The product feed: eager fetch, validated catalog, lazily revealed pages.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use vitrine_catalog::{validate, Catalog, Product};
use vitrine_data::CatalogSource;

use crate::error::FeedError;
use crate::window::{RevealedWindow, PAGE_SIZE};

/// Feed tuning knobs.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Entries revealed per page load.
    pub page_size: usize,
    /// Settling pause inside [`ProductFeed::load_more`], simulating network
    /// latency and absorbing trigger thrash. Zero is valid and changes no
    /// page semantics.
    pub settle_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            settle_delay: Duration::from_millis(500),
        }
    }
}

impl FeedConfig {
    /// Default configuration: page size 12, 500ms settle delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Lifecycle phase of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FeedPhase {
    /// Initial fetch-and-validate in progress.
    Loading,
    /// Catalog held, pages revealing.
    Ready,
    /// Fetch or validation failed; carries the user-facing message.
    Failed(String),
}

struct FeedInner {
    phase: FeedPhase,
    catalog: Catalog,
    window: RevealedWindow,
    loading_more: bool,
    // Bumped by retry/dispose; completions from an older epoch are dropped.
    epoch: u64,
    disposed: bool,
}

/// Read surface for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSnapshot {
    /// The revealed prefix of the catalog.
    pub products: Vec<Product>,
    /// Initial fetch-and-validate in progress.
    pub loading: bool,
    /// A page advance in progress.
    pub loading_more: bool,
    /// User-facing message when the fetch-and-validate path failed.
    pub error: Option<String>,
    /// Whether unrevealed entries remain.
    pub has_more: bool,
    /// Number of revealed entries.
    pub revealed: usize,
    /// Catalog length, for "showing X of Y" affordances.
    pub total: usize,
}

/// The paginated product feed.
///
/// Exclusively owns the catalog and the revealed window. Clones share one
/// state; all mutation resolves onto it sequentially — guard flags are
/// checked and set under the lock, and the lock is never held across an
/// await.
pub struct ProductFeed<S> {
    source: Arc<S>,
    config: FeedConfig,
    inner: Arc<Mutex<FeedInner>>,
}

impl<S> Clone for ProductFeed<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: self.config.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CatalogSource> ProductFeed<S> {
    /// Create a feed over a source. Call [`load`](Self::load) to populate it.
    pub fn new(source: S, config: FeedConfig) -> Self {
        let inner = FeedInner {
            phase: FeedPhase::Loading,
            catalog: Catalog::default(),
            window: RevealedWindow::empty(config.page_size),
            loading_more: false,
            epoch: 0,
            disposed: false,
        };
        Self {
            source: Arc::new(source),
            config,
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Fetch and validate the catalog, then reveal the first page.
    ///
    /// On failure the feed enters a failed phase carrying a single
    /// user-facing message; the underlying cause is distinguished only in
    /// the log.
    pub async fn load(&self) {
        let epoch = {
            let mut inner = self.inner.lock().unwrap();
            inner.phase = FeedPhase::Loading;
            inner.epoch
        };
        let outcome = self.fetch_and_validate().await;
        self.apply_load(epoch, outcome);
    }

    async fn fetch_and_validate(&self) -> Result<Catalog, FeedError> {
        let raw = self.source.fetch_catalog().await?;
        Ok(validate(&raw)?)
    }

    fn apply_load(&self, epoch: u64, outcome: Result<Catalog, FeedError>) {
        let mut inner = self.inner.lock().unwrap();
        if inner.disposed || inner.epoch != epoch {
            tracing::debug!("discarding stale catalog load");
            return;
        }
        match outcome {
            Ok(catalog) => {
                tracing::debug!(products = catalog.len(), "catalog loaded");
                inner.window = RevealedWindow::first_page(self.config.page_size, catalog.len());
                inner.catalog = catalog;
                inner.phase = FeedPhase::Ready;
            }
            Err(err) => {
                tracing::error!(%err, "catalog load failed");
                inner.catalog = Catalog::default();
                inner.window = RevealedWindow::empty(self.config.page_size);
                inner.phase = FeedPhase::Failed(err.to_string());
            }
        }
    }

    /// Reveal up to one further page after the settle delay.
    ///
    /// Guaranteed no-op while an advance is already in flight, while the
    /// feed is not ready, or once the catalog is exhausted: no state
    /// change, no duplicate work. Calls are serialized by the in-flight
    /// guard — a call arriving while one is outstanding is discarded,
    /// never queued.
    pub async fn load_more(&self) {
        let epoch = {
            let mut inner = self.inner.lock().unwrap();
            let ready = inner.phase == FeedPhase::Ready;
            if !ready || inner.loading_more || !inner.window.has_more() {
                return;
            }
            inner.loading_more = true;
            inner.epoch
        };

        tokio::time::sleep(self.config.settle_delay).await;

        let mut inner = self.inner.lock().unwrap();
        if inner.disposed || inner.epoch != epoch {
            tracing::debug!("discarding stale page advance");
            return;
        }
        let revealed = inner.window.advance();
        inner.loading_more = false;
        tracing::debug!(revealed, total = inner.window.total(), "page revealed");
    }

    /// Discard everything and re-run the fetch-and-validate path.
    ///
    /// Recovery, not resume: any in-flight completion is cancelled via the
    /// epoch bump and the revealed window resets to the first page.
    pub async fn retry(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.epoch += 1;
            inner.phase = FeedPhase::Loading;
            inner.catalog = Catalog::default();
            inner.window = RevealedWindow::empty(self.config.page_size);
            inner.loading_more = false;
        }
        self.load().await;
    }

    /// Tear the feed down. In-flight completions resolve but are dropped
    /// rather than applied to the disposed state.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.disposed = true;
        inner.epoch += 1;
        inner.loading_more = false;
    }

    /// Snapshot the current read state.
    pub fn snapshot(&self) -> FeedSnapshot {
        let inner = self.inner.lock().unwrap();
        let revealed = inner.window.revealed();
        FeedSnapshot {
            products: inner.catalog.products()[..revealed].to_vec(),
            loading: inner.phase == FeedPhase::Loading,
            loading_more: inner.loading_more,
            error: match &inner.phase {
                FeedPhase::Failed(message) => Some(message.clone()),
                _ => None,
            },
            has_more: inner.window.has_more(),
            revealed,
            total: inner.catalog.len(),
        }
    }
}
