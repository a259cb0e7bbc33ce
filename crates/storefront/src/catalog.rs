//! Catalog loading and caching.
//!
//! The catalog JSON export is the storefront's only data source. A parsed
//! copy is kept in a `moka` cache and re-read from disk once its TTL
//! expires; concurrent requests during a reload share a single load.

use std::path::PathBuf;
use std::sync::Arc;

use glasskin_core::{Catalog, CatalogError};
use moka::future::Cache;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::CatalogConfig;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid catalog.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Cached access to the catalog.
///
/// Cheaply cloneable; clones share the cache.
#[derive(Clone)]
pub struct CatalogStore {
    path: Arc<PathBuf>,
    cache: Cache<(), Arc<Catalog>>,
}

impl CatalogStore {
    /// Create a store for the configured catalog file.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.ttl)
            .build();

        Self {
            path: Arc::new(config.path.clone()),
            cache,
        }
    }

    /// The current catalog, loading it from disk if the cached copy expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    /// Failed loads are not cached.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Arc<Catalog>, Arc<CatalogLoadError>> {
        let path = Arc::clone(&self.path);
        self.cache
            .try_get_with((), async move { load_catalog(&path).await.map(Arc::new) })
            .await
    }
}

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub async fn load_catalog(path: &std::path::Path) -> Result<Catalog, CatalogLoadError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_json_str(&json)?;
    info!(
        path = %path.display(),
        products = catalog.products.len(),
        collections = catalog.collections.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
