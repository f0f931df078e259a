//! Catalog structures — the immutable catalog, its stats, and a reloadable handle.

pub mod movie_catalog;
pub mod shared;
pub mod stats;

pub use movie_catalog::Catalog;
pub use shared::SharedCatalog;
pub use stats::CatalogStats;
