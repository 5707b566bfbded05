//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::{ErrorKind, Result};
use crate::interface::{CatalogApi, HttpClient};
use reqwest::Client;
use serde_json::Value;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client })
    }
}

impl CatalogApi for NoWasmClient {
    async fn fetch_catalog(&self, catalog_url: &str) -> Result<Value> {
        log::debug!("GET {catalog_url}");

        let resp = self.client.get(catalog_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ErrorKind::CatalogError(format!("HTTP error: {status}")).into());
        }

        Ok(resp.json::<Value>().await?)
    }
}

pub async fn create_client() -> Result<NoWasmClient> {
    NoWasmClient::new().await
}

pub async fn fetch_catalog(client: &NoWasmClient, catalog_url: &str) -> Result<Value> {
    client.fetch_catalog(catalog_url).await
}
