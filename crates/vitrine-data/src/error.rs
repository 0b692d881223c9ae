//! Transport error types.

use thiserror::Error;

/// Errors that can occur while fetching the catalog payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with an error status.
    #[error("failed to fetch products: HTTP {status} for {url}")]
    Http {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The endpoint could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The request could not be constructed or sent.
    #[error("request error: {0}")]
    Request(String),

    /// The response body was not decodable JSON.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}
