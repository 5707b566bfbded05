#![allow(async_fn_in_trait)]

use crate::error::Result;
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for catalog HTTP operations
pub trait CatalogApi {
    /// Fetch the full course catalog document
    async fn fetch_catalog(&self, catalog_url: &str) -> Result<Value>;
}
