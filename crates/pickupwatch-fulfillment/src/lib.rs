pub mod catalog;
pub mod client;
pub mod error;
pub mod parse;
pub mod retry;
pub mod types;

pub use catalog::{extract_catalog, StorefrontClient};
pub use client::FulfillmentClient;
pub use error::{CatalogError, FulfillmentError};
pub use retry::RetryPolicy;
