//! End-to-end feed lifecycle: fetch, validate, reveal, recover.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use vitrine_data::{CatalogSource, FetchError, StaticSource};
use vitrine_feed::{FeedConfig, ProductFeed};

fn payload(count: usize) -> Value {
    let records: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("product-{id}"),
                "price": 2.5 * id as f64,
            })
        })
        .collect();
    Value::Array(records)
}

fn instant_config() -> FeedConfig {
    FeedConfig::new().with_settle_delay(Duration::ZERO)
}

/// Source whose payload can be swapped between fetches.
#[derive(Clone)]
struct SwitchableSource {
    payload: Arc<Mutex<Result<Value, FetchError>>>,
}

impl SwitchableSource {
    fn new(initial: Result<Value, FetchError>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(initial)),
        }
    }

    fn set(&self, next: Result<Value, FetchError>) {
        *self.payload.lock().unwrap() = next;
    }
}

#[async_trait]
impl CatalogSource for SwitchableSource {
    async fn fetch_catalog(&self) -> Result<Value, FetchError> {
        self.payload.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn initial_load_reveals_first_page() {
    let feed = ProductFeed::new(StaticSource::new(payload(25)), instant_config());
    feed.load().await;

    let snapshot = feed.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error, None);
    assert_eq!(snapshot.revealed, 12);
    assert_eq!(snapshot.total, 25);
    assert!(snapshot.has_more);
    assert_eq!(snapshot.products.len(), 12);
    assert_eq!(snapshot.products[0].id, 1);
    assert_eq!(snapshot.products[11].id, 12);
}

#[tokio::test]
async fn load_more_walks_pages_then_noops() {
    let feed = ProductFeed::new(StaticSource::new(payload(25)), instant_config());
    feed.load().await;

    feed.load_more().await;
    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 24);
    assert!(snapshot.has_more);

    feed.load_more().await;
    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 25);
    assert!(!snapshot.has_more);

    // exhausted: guaranteed no-op
    feed.load_more().await;
    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 25);
    assert!(!snapshot.has_more);
}

#[tokio::test]
async fn catalog_smaller_than_page_is_one_page() {
    let feed = ProductFeed::new(StaticSource::new(payload(5)), instant_config());
    feed.load().await;

    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 5);
    assert!(!snapshot.has_more);

    feed.load_more().await;
    assert_eq!(feed.snapshot().revealed, 5);
}

#[tokio::test]
async fn load_more_before_load_is_noop() {
    let feed = ProductFeed::new(StaticSource::new(payload(25)), instant_config());
    feed.load_more().await;

    let snapshot = feed.snapshot();
    assert!(snapshot.loading);
    assert_eq!(snapshot.revealed, 0);
}

#[tokio::test]
async fn concurrent_load_more_advances_exactly_one_page() {
    let config = FeedConfig::new().with_settle_delay(Duration::from_millis(50));
    let feed = ProductFeed::new(StaticSource::new(payload(25)), config);
    feed.load().await;

    let first = feed.clone();
    let second = feed.clone();
    tokio::join!(first.load_more(), second.load_more());
    assert_eq!(feed.snapshot().revealed, 24);

    // a burst of triggers still advances one page
    let clones: Vec<_> = (0..4).map(|_| feed.clone()).collect();
    futures::future::join_all(clones.iter().map(|f| f.load_more())).await;
    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 25);
    assert!(!snapshot.loading_more);
}

#[tokio::test]
async fn non_array_payload_flags_error() {
    let feed = ProductFeed::new(
        StaticSource::new(json!({"items": []})),
        instant_config(),
    );
    feed.load().await;

    let snapshot = feed.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(
        snapshot.error.as_deref(),
        Some("invalid product data format received")
    );
    assert!(snapshot.products.is_empty());
    assert!(!snapshot.has_more);
}

#[tokio::test]
async fn all_invalid_records_flag_empty_catalog() {
    let feed = ProductFeed::new(
        StaticSource::new(json!([{"id": 1, "title": "free", "price": 0.0}])),
        instant_config(),
    );
    feed.load().await;

    assert_eq!(
        feed.snapshot().error.as_deref(),
        Some("no valid products found in the data")
    );
}

#[tokio::test]
async fn transport_failure_flags_error() {
    let source = SwitchableSource::new(Err(FetchError::Connection("refused".to_string())));
    let feed = ProductFeed::new(source, instant_config());
    feed.load().await;

    let snapshot = feed.snapshot();
    let message = snapshot.error.expect("failed phase");
    assert_eq!(message, "connection error: refused");
    assert!(snapshot.products.is_empty());
}

#[tokio::test]
async fn retry_refetches_from_scratch() {
    let source = SwitchableSource::new(Ok(json!("not an array")));
    let feed = ProductFeed::new(source.clone(), instant_config());
    feed.load().await;
    assert!(feed.snapshot().error.is_some());

    source.set(Ok(payload(25)));
    feed.retry().await;

    let snapshot = feed.snapshot();
    assert_eq!(snapshot.error, None);
    assert_eq!(snapshot.revealed, 12);
    assert_eq!(snapshot.total, 25);
}

#[tokio::test]
async fn retry_discards_revealed_window() {
    let source = SwitchableSource::new(Ok(payload(25)));
    let feed = ProductFeed::new(source, instant_config());
    feed.load().await;
    feed.load_more().await;
    assert_eq!(feed.snapshot().revealed, 24);

    // recovery, not resume
    feed.retry().await;
    assert_eq!(feed.snapshot().revealed, 12);
}

#[tokio::test]
async fn stale_advance_after_retry_is_dropped() {
    let config = FeedConfig::new().with_settle_delay(Duration::from_millis(100));
    let feed = ProductFeed::new(StaticSource::new(payload(25)), config);
    feed.load().await;

    let in_flight = feed.clone();
    let handle = tokio::spawn(async move { in_flight.load_more().await });
    tokio::time::sleep(Duration::from_millis(10)).await;

    feed.retry().await;
    handle.await.unwrap();

    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 12);
    assert!(!snapshot.loading_more);
}

#[tokio::test]
async fn advance_completing_after_dispose_is_ignored() {
    let config = FeedConfig::new().with_settle_delay(Duration::from_millis(100));
    let feed = ProductFeed::new(StaticSource::new(payload(25)), config);
    feed.load().await;

    let in_flight = feed.clone();
    let handle = tokio::spawn(async move { in_flight.load_more().await });
    tokio::time::sleep(Duration::from_millis(10)).await;

    feed.dispose();
    handle.await.unwrap();

    let snapshot = feed.snapshot();
    assert_eq!(snapshot.revealed, 12);
    assert!(!snapshot.loading_more);
}
