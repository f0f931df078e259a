//! Core catalog structure — the ordered movie sequence plus its ID index.

use std::path::Path;

use crate::format::DatasetReader;
use crate::index::IdIndex;
use crate::types::{now_micros, CatalogResult, Movie, MovieId, BUNDLED_DATASET};

use super::stats::CatalogStats;

/// The immutable in-memory movie catalog.
///
/// Holds the movies in dataset order and an ID index derived from them.
/// There is no mutation path: reloading means building a new `Catalog`
/// (see [`SharedCatalog`](super::SharedCatalog)).
pub struct Catalog {
    /// All movies, in dataset order.
    movies: Vec<Movie>,
    /// ID -> position in `movies`.
    id_index: IdIndex,
    /// When this catalog was built (Unix epoch microseconds).
    loaded_at: u64,
}

impl Catalog {
    /// Build a catalog from records. Nothing is rejected; a repeated ID
    /// keeps both records in the sequence and indexes the later one.
    pub fn new(movies: Vec<Movie>) -> Self {
        let id_index = IdIndex::build(&movies);
        log::info!(
            "Catalog built with {} movies ({} distinct IDs)",
            movies.len(),
            id_index.len()
        );
        Self {
            movies,
            id_index,
            loaded_at: now_micros(),
        }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Catalog over the dataset shipped with the crate.
    pub fn bundled() -> Self {
        Self::new(DatasetReader::load_from_str(BUNDLED_DATASET))
    }

    /// Load a dataset file leniently: a missing file gives an empty catalog,
    /// a bad record truncates the catalog to the records before it.
    pub fn from_path(path: &Path) -> Self {
        Self::new(DatasetReader::load_from_file(path))
    }

    /// Load a dataset file, failing on the first error.
    pub fn try_from_path(path: &Path) -> CatalogResult<Self> {
        Ok(Self::new(DatasetReader::read_from_file(path)?))
    }

    /// All movies, in dataset order.
    pub fn get_all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by ID. Absent and non-positive IDs are never valid
    /// and short-circuit to `None` without touching the index.
    pub fn get_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        let id = id.filter(|&id| id > 0)?;
        self.id_index.get(id).map(|pos| &self.movies[pos])
    }

    /// Number of movies (including any duplicate-ID records).
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog holds no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get the ID index.
    pub fn id_index(&self) -> &IdIndex {
        &self.id_index
    }

    /// When this catalog was built (Unix epoch microseconds).
    pub fn loaded_at(&self) -> u64 {
        self.loaded_at
    }

    /// Summary statistics.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("movies", &self.movies.len())
            .field("distinct_ids", &self.id_index.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
