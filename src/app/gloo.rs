//! WASM application implementation
//!
//! This module contains the application logic for WASM environments,
//! providing browser-compatible catalog loading. Rendering belongs to the
//! embedding front end.

use crate::app::catalog::parse_catalog;
use crate::client::gloo::WasmClient;
use crate::error::Result;
use crate::interface::CatalogApi;
use crate::model::structs::CourseInfo;

/// Catalog path relative to the embedding origin
pub const DEFAULT_CATALOG_PATH: &str = "/api/courses.json";

/// One fetch per page load, via the browser fetch API
pub async fn load_catalog(client: &WasmClient, catalog_url: &str) -> Result<Vec<CourseInfo>> {
    let document = client.fetch_catalog(catalog_url).await?;
    parse_catalog(document)
}
