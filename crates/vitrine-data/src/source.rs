//! Catalog source implementations.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Where the product payload comes from.
// Spin's outbound HTTP future is not Send, so the trait relaxes the bound
// on wasm32 targets only.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog payload.
    async fn fetch_catalog(&self) -> Result<Value, FetchError>;
}

/// HTTP source performing one unauthenticated GET against a fixed endpoint.
///
/// No query parameters and no server-side pagination: the endpoint serves
/// the whole product array in one response.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self) -> Result<Value, FetchError> {
        let request = spin_sdk::http::Request::get(&self.url);
        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = *response.status();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: self.url.clone(),
            });
        }

        serde_json::from_slice(response.body())
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    // The HTTP transport is wasm-only; native callers supply their own source.
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self) -> Result<Value, FetchError> {
        Err(FetchError::Connection(format!(
            "no native transport available for {}",
            self.url
        )))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Value, FetchError> {
        self.send().await
    }
}

/// In-memory source serving a canned payload.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: Value,
}

impl StaticSource {
    /// Create a source that always returns `payload`.
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<Value, FetchError> {
        Ok(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_source_keeps_url() {
        let source = HttpCatalogSource::new("https://example.com/products.json");
        assert_eq!(source.url(), "https://example.com/products.json");
    }

    #[tokio::test]
    async fn test_static_source_echoes_payload() {
        let payload = json!([{"id": 1, "title": "a", "price": 1.0}]);
        let source = StaticSource::new(payload.clone());
        assert_eq!(source.fetch_catalog().await.unwrap(), payload);
    }
}
