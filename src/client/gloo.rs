//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::{ErrorKind, Result};
use crate::interface::{CatalogApi, HttpClient};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestMode;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl WasmClient {
    /// Handle JSON response with error checking
    async fn handle_json_response(resp: gloo_net::http::Response) -> Result<Value> {
        let status = resp.ok();
        let text = resp.text().await?;

        if !status {
            return Err(ErrorKind::CatalogError(format!("Request failed: {text}")).into());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(json),
            Err(_) => Err(ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into()),
        }
    }
}

impl CatalogApi for WasmClient {
    async fn fetch_catalog(&self, catalog_url: &str) -> Result<Value> {
        log::debug!("GET {catalog_url}");

        let resp = Request::get(catalog_url)
            .mode(RequestMode::Cors)
            .header("Accept", "application/json")
            .send()
            .await?;

        log::debug!("Response status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }
}
