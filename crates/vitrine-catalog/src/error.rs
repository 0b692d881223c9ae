//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while validating a fetched catalog payload.
///
/// The `Display` strings double as the user-facing messages; callers that
/// need to distinguish causes do so in logs, not in control flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The top-level payload was not a JSON array.
    #[error("invalid product data format received")]
    InvalidFormat,

    /// No record survived validation.
    #[error("no valid products found in the data")]
    EmptyCatalog,
}
