//! Atomically swappable catalog handle for hosts that reload at runtime.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::CatalogResult;

use super::Catalog;

/// Holds the catalog readers currently see.
///
/// A reload builds a complete new [`Catalog`] first and only then swaps the
/// pointer, so readers observe either the old catalog or the new one, never
/// a half-built state. Snapshots taken before a swap stay valid.
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    /// Wrap an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog visible right now.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Publish a new catalog, returning the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Rebuild from a dataset file leniently and publish it. Returns the
    /// number of movies now visible.
    pub fn reload_from_path(&self, path: &Path) -> usize {
        let catalog = Catalog::from_path(path);
        let count = catalog.len();
        self.replace(catalog);
        log::info!("Catalog reloaded from {} ({} movies)", path.display(), count);
        count
    }

    /// Rebuild from a dataset file strictly. On failure the current catalog
    /// stays published.
    pub fn try_reload_from_path(&self, path: &Path) -> CatalogResult<usize> {
        let catalog = Catalog::try_from_path(path)?;
        let count = catalog.len();
        self.replace(catalog);
        log::info!("Catalog reloaded from {} ({} movies)", path.display(), count);
        Ok(count)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
