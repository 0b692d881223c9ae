//! Feed error types.

use thiserror::Error;
use vitrine_catalog::CatalogError;
use vitrine_data::FetchError;

/// Errors on the fetch-and-validate path.
///
/// The UI receives only the `Display` string plus a retry affordance; the
/// variant matters for logging alone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Transport failure during the catalog fetch.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched payload failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
