use thiserror::Error;

/// Errors from a single fulfillment lookup.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed as JSON but lacks a field the lookup depends on.
    #[error("malformed fulfillment response for {variant}: {reason}")]
    MalformedResponse { variant: String, reason: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors from fetching or extracting the storefront catalog.
///
/// Every variant means "no catalog"; callers never receive a partial one.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("product selection data not found in page")]
    MarkerNotFound,

    #[error("product selection data is not a complete object literal")]
    Unterminated,

    #[error("product selection data is not valid JSON: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("invalid product entry: {0}")]
    InvalidProduct(String),

    #[error("product selection data lists no products")]
    Empty,
}
