//! movie-catalog — read-only in-memory movie catalog with lookup and search.
//!
//! A dataset of movie records is loaded once into an immutable [`Catalog`]
//! (dataset-ordered sequence plus an ID index). Callers then list movies,
//! look one up by ID, or filter by any combination of name, ID and genre.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod contracts;
pub mod engine;
pub mod format;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, CatalogStats, SharedCatalog};
pub use config::CatalogConfig;
pub use contracts::MovieLookup;
pub use engine::{is_valid_request, SearchCriteria, SearchEngine, SearchParams};
pub use format::{DatasetReader, DecodeReport};
pub use index::IdIndex;
pub use types::{
    CatalogError, CatalogResult, Movie, MovieBuilder, MovieId, BUNDLED_MOVIE_COUNT,
    DATASET_ENV_VAR,
};
