//! Catalog loading
//!
//! The feed is fetched exactly once per session. A failed load is terminal:
//! there is no retry, timeout or cancellation, and every failure cause is
//! reported to the user the same way.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};
use vitrine_types::Product;

use crate::catalog::Catalog;
use crate::error::LoadError;

/// Where the product feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk, relative paths resolved against the working directory.
    Path(PathBuf),
    /// A JSON document served over HTTP(S), fetched with a single GET.
    Url(String),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// Outcome of the one-shot load as seen by the UI.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Fetch and decode the feed, returning it newest first.
pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog, LoadError> {
    info!(source = %source, "Loading catalog");

    let result = fetch(source).await.and_then(|bytes| {
        debug!(bytes = bytes.len(), "Catalog payload received");
        serde_json::from_slice::<Vec<Product>>(&bytes).map_err(LoadError::Parse)
    });

    match result {
        Ok(records) => {
            let catalog = Catalog::from_feed(records);
            info!(
                products = catalog.len(),
                categories = catalog.categories().len().saturating_sub(1),
                "Catalog loaded"
            );
            Ok(catalog)
        }
        Err(err) => {
            warn!(source = %source, error = %err, "Catalog load failed");
            Err(err)
        }
    }
}

/// Run [`load_catalog`] to completion on a private current-thread runtime.
///
/// For callers that are not inside an async context (the CLI commands and
/// the TUI's loader thread).
pub fn load_catalog_blocking(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(LoadError::Io)?;
    runtime.block_on(load_catalog(source))
}

async fn fetch(source: &CatalogSource) -> Result<Vec<u8>, LoadError> {
    match source {
        CatalogSource::Path(path) => tokio::fs::read(path).await.map_err(LoadError::Io),
        CatalogSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await.map_err(LoadError::Http)?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            let body = response.bytes().await.map_err(LoadError::Http)?;
            Ok(body.to_vec())
        }
    }
}
